//! Domain Layer
//!
//! Records read from the remote collections.
//! This layer has NO knowledge of where records come from.

mod entity;
mod social_link;
mod project;
mod contact_info;
mod sort_key;

pub use entity::Document;
pub use social_link::SocialLink;
pub use project::{Project, ProjectType};
pub use contact_info::ContactInfo;
