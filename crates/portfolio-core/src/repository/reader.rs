//! Ordered Collection Reader
//!
//! The one parametric "load an ordered collection of T" operation every
//! data hook on the site goes through.

use super::query::CollectionSpec;
use super::traits::DocumentSource;
use crate::domain::Document;
use crate::error::RetrievalError;

/// Reads whole collections from an injected source
#[derive(Debug, Clone)]
pub struct CollectionReader<S> {
    source: S,
}

impl<S: DocumentSource> CollectionReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Every record of `spec.collection`, ascending by `T::sort_key()`
    ///
    /// An empty collection is `Ok(vec![])`. Failures are logged here, once,
    /// and returned to the caller.
    pub async fn load_ordered<T: Document>(
        &self,
        spec: &CollectionSpec,
    ) -> Result<Vec<T>, RetrievalError> {
        tracing::debug!(collection = %spec.collection, order_by = %spec.order_by, "querying collection");

        match self.fetch::<T>(spec).await {
            Ok(records) => {
                if records.is_empty() {
                    tracing::info!(collection = %spec.collection, "no documents found");
                } else {
                    tracing::debug!(collection = %spec.collection, count = records.len(), "loaded collection");
                }
                Ok(records)
            }
            Err(err) => {
                tracing::error!(collection = %spec.collection, error = %err, "failed to fetch collection");
                Err(err)
            }
        }
    }

    async fn fetch<T: Document>(&self, spec: &CollectionSpec) -> Result<Vec<T>, RetrievalError> {
        let documents = self.source.run_query(&spec.to_query()).await?;

        let mut records = documents
            .into_iter()
            .map(|doc| doc.into_record::<T>(&spec.collection))
            .collect::<Result<Vec<T>, _>>()?;

        // Stable: equal keys keep the source's order
        records.sort_by_key(T::sort_key);
        Ok(records)
    }
}
