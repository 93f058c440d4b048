//! Domain Layer - Core Document Trait
//!
//! Every record read from a remote collection carries the document id it
//! was stored under and an integer key the collection is ordered by.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Core trait for all collection records
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Field the remote query orders by (ascending)
    const ORDER_FIELD: &'static str;

    /// Persistent document identifier
    fn id(&self) -> &str;

    /// Value of `ORDER_FIELD`, used to re-sort on the client
    fn sort_key(&self) -> i64;
}
