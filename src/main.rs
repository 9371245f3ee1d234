use leptos::prelude::*;

use insights_hub::app::App;
use insights_hub::config::Config;
use insights_hub::logging;

fn main() {
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    logging::init(&config.log_level);
    if let Some(e) = load_error {
        tracing::warn!("Using default config: {}", e);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
