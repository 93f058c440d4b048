//! Repository Layer - Core Traits
//!
//! Defines the abstract interface a collection reader runs against.
//! Implementations can use Firestore, in-memory fixtures, etc.

use async_trait::async_trait;

use super::document::RawDocument;
use super::query::StructuredQuery;
use crate::error::RetrievalError;

/// Anything that can answer a structured query with decoded documents
///
/// Futures are `?Send`: in the browser everything runs on the single
/// event-loop thread.
#[async_trait(?Send)]
pub trait DocumentSource {
    /// Run `query` and return every matching document, in whatever order the
    /// source produces them
    async fn run_query(&self, query: &StructuredQuery) -> Result<Vec<RawDocument>, RetrievalError>;
}
