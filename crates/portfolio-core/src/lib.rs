//! Portfolio Core
//!
//! Everything behind the portfolio site that is not DOM code:
//! - domain: records stored in the remote collections
//! - repository: document sources (Firestore, in-memory) and the ordered reader
//! - state: the load-once lifecycle a data hook exposes
//! - filter / icons / format: pure helpers the sections render with
//! - typing / viewport / contact_form: interaction state
//!
//! Compiles for both `wasm32-unknown-unknown` and the host, so all of it is
//! tested natively.

pub mod config;
pub mod contact_form;
pub mod content;
pub mod domain;
pub mod error;
pub mod filter;
pub mod format;
pub mod icons;
pub mod repository;
pub mod state;
pub mod typing;
pub mod viewport;

pub use config::SiteConfig;
pub use domain::{ContactInfo, Document, Project, ProjectType, SocialLink};
pub use error::{ConfigError, RetrievalError};
pub use repository::{CollectionReader, CollectionSpec, DocumentSource, SiteSource};
pub use state::{LoadState, Placeholders, Presentation};
