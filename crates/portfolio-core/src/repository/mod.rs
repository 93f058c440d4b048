//! Repository Layer
//!
//! Read-only access to remote collections: the `DocumentSource` seam, its
//! Firestore and in-memory implementations, and the ordered reader on top.

mod traits;
mod query;
mod document;
mod reader;
mod memory;
mod source;
pub mod firestore;

pub use traits::DocumentSource;
pub use query::{CollectionSpec, Direction, StructuredQuery};
pub use document::RawDocument;
pub use reader::CollectionReader;
pub use memory::MemorySource;
pub use source::SiteSource;
pub use firestore::FirestoreClient;
