//! Deep merge of partial state trees
//!
//! Merge rules, applied recursively:
//! - object into object: keys combine, nested objects merge
//! - anything else (arrays, scalars, `null`): the patch value replaces the
//!   target wholesale; arrays are never concatenated or merged by index

use serde_json::Value;

/// Merge `patch` into `target` in place
pub fn deep_merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

/// Build a nested object holding `leaf` under `path`
///
/// `at_path(&["socialPost", "publishable"], v)` yields
/// `{"socialPost": {"publishable": v}}`.
pub fn at_path(path: &[&str], leaf: Value) -> Value {
    path.iter().rev().fold(leaf, |inner, key| {
        let mut object = serde_json::Map::new();
        object.insert((*key).to_string(), inner);
        Value::Object(object)
    })
}
