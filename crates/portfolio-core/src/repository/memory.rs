//! In-Memory Document Source
//!
//! Serves collections from memory, in insertion order. Backs the site when
//! no Firestore project is configured and stands in for the network in tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::document::RawDocument;
use super::query::StructuredQuery;
use super::traits::DocumentSource;
use crate::domain::Document;
use crate::error::RetrievalError;

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: Arc<HashMap<String, Vec<RawDocument>>>,
    /// When set, every query fails with this transport message
    failure: Option<String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every read fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            collections: Arc::default(),
            failure: Some(message.into()),
        }
    }

    pub fn with_documents(mut self, collection: impl Into<String>, documents: Vec<RawDocument>) -> Self {
        Arc::make_mut(&mut self.collections)
            .entry(collection.into())
            .or_default()
            .extend(documents);
        self
    }

    /// Add typed records; a record that cannot be serialised is skipped
    pub fn with_records<T: Document>(self, collection: impl Into<String>, records: &[T]) -> Self {
        let collection = collection.into();
        let documents = records
            .iter()
            .filter_map(|record| match RawDocument::from_record(record) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    tracing::warn!(collection = %collection, id = record.id(), error = %e, "skipping record");
                    None
                }
            })
            .collect();
        self.with_documents(collection, documents)
    }
}

#[async_trait(?Send)]
impl DocumentSource for MemorySource {
    async fn run_query(&self, query: &StructuredQuery) -> Result<Vec<RawDocument>, RetrievalError> {
        if let Some(message) = &self.failure {
            return Err(RetrievalError::transport(query.collection(), message));
        }
        Ok(self
            .collections
            .get(query.collection())
            .cloned()
            .unwrap_or_default())
    }
}
