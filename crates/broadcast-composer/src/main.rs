use anyhow::{Context, Result};
use broadcast_composer::app::broadcast_composer::STORE_NAME as COMPOSER_STORE;
use broadcast_composer::app::recipient_selector::STORE_NAME as SELECTOR_STORE;
use broadcast_composer::app::{
    BroadcastComposerApp, RecipientSelectorApp, UiEvent, subscribe_debounced,
};
use broadcast_composer::store::Store;
use composer_api::{FixtureApi, PublishingApi};
use composer_config::AppConfig;
use serde::Serialize;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting broadcast-composer");

    let config = AppConfig::load();
    let api: Arc<dyn PublishingApi> = Arc::new(load_api(&config)?);

    let selector = RecipientSelectorApp::new(Arc::clone(&api), &config);
    let composer = BroadcastComposerApp::new(api, &config);

    print_renders(selector.store(), SELECTOR_STORE, &config);
    print_renders(composer.store(), COMPOSER_STORE, &config);

    tokio::join!(selector.bootstrap(), composer.bootstrap());

    // One UI event per line
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read UI events")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<UiEvent>(line) {
            Ok(event) => {
                if !selector.handle_event(&event) && !composer.handle_event(&event) {
                    log::warn!("No widget handles {:?}", event);
                }
            }
            Err(e) => log::warn!("Ignoring malformed UI event {}: {}", line, e),
        }
    }

    // Let pending debounced work and fetches land before exiting
    tokio::time::sleep(config.settle_time()).await;

    log::info!("Exiting broadcast-composer");
    Ok(())
}

fn load_api(config: &AppConfig) -> Result<FixtureApi> {
    match &config.fixtures_path {
        Some(path) => FixtureApi::from_file(path)
            .with_context(|| format!("Failed to load fixtures from {}", path.display())),
        None => {
            log::warn!("No fixtures_path configured, serving empty data");
            Ok(FixtureApi::default())
        }
    }
}

#[derive(Serialize)]
struct Snapshot<'a, S> {
    store: &'a str,
    state: &'a S,
}

/// Print a JSON line per render of a store
fn print_renders<S>(store: &Store<S>, name: &'static str, config: &AppConfig)
where
    S: Clone + Serialize + Send + Sync + 'static,
{
    subscribe_debounced(store, config.render_debounce(), move |state: S| {
        match serde_json::to_string(&Snapshot { store: name, state: &state }) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("[{}] Failed to serialize state: {}", name, e),
        }
    });
}
