//! Site Context
//!
//! Configuration and the shared collection reader, provided once by `App`
//! and picked up by the data hooks.

use std::sync::Arc;

use leptos::prelude::*;
use portfolio_core::{CollectionReader, SiteConfig, SiteSource};

#[derive(Clone)]
pub struct SiteContext {
    pub config: Arc<SiteConfig>,
    /// Every collection read goes through this one handle
    pub reader: CollectionReader<SiteSource>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        let reader = CollectionReader::new(SiteSource::from_config(&config));
        Self {
            config: Arc::new(config),
            reader,
        }
    }
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext should be provided")
}
