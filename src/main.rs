//! Portfolio Site Entry Point

mod app;
mod components;
mod context;
mod dom;
mod hooks;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;
use portfolio_core::SiteConfig;

/// Baked-in settings; Firestore credentials can also come from the build env
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::from_toml_str(SITE_TOML).map(|config| {
        config.with_overrides(
            option_env!("PORTFOLIO_FIRESTORE_PROJECT_ID"),
            option_env!("PORTFOLIO_FIRESTORE_API_KEY"),
        )
    });

    let level = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.logging.level().ok())
        .unwrap_or(tracing::Level::INFO);
    logging::init(level);

    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid site.toml, using defaults");
        SiteConfig::default()
    });

    mount_to_body(move || view! { <App config=config /> });
}
