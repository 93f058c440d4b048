//! Firestore Access
//!
//! REST client plus the codec for Firestore's typed field values.

mod client;
pub mod value;

pub use client::FirestoreClient;
