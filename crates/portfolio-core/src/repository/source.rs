//! Site Document Source
//!
//! The one source handle the site builds at startup and shares with every
//! reader: Firestore when a project is configured, built-in content otherwise.

use async_trait::async_trait;

use super::document::RawDocument;
use super::firestore::FirestoreClient;
use super::memory::MemorySource;
use super::query::StructuredQuery;
use super::traits::DocumentSource;
use crate::config::SiteConfig;
use crate::content;
use crate::error::RetrievalError;

#[derive(Debug, Clone)]
pub enum SiteSource {
    Firestore(FirestoreClient),
    Memory(MemorySource),
}

impl SiteSource {
    pub fn from_config(config: &SiteConfig) -> Self {
        if config.firestore.is_configured() {
            tracing::info!(project = %config.firestore.project_id, "reading content from Firestore");
            SiteSource::Firestore(FirestoreClient::new(&config.firestore))
        } else {
            tracing::warn!("no Firestore project configured, serving built-in content");
            SiteSource::Memory(content::sample_source(&config.collections))
        }
    }
}

#[async_trait(?Send)]
impl DocumentSource for SiteSource {
    async fn run_query(&self, query: &StructuredQuery) -> Result<Vec<RawDocument>, RetrievalError> {
        match self {
            SiteSource::Firestore(client) => client.run_query(query).await,
            SiteSource::Memory(memory) => memory.run_query(query).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_site_uses_memory() {
        let source = SiteSource::from_config(&SiteConfig::default());
        assert!(matches!(source, SiteSource::Memory(_)));
    }

    #[test]
    fn test_configured_site_uses_firestore() {
        let mut config = SiteConfig::default();
        config.firestore.project_id = "portfolio-123".to_string();
        assert!(matches!(SiteSource::from_config(&config), SiteSource::Firestore(_)));
    }
}
