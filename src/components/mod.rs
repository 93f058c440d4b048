//! UI Components
//!
//! Page sections plus the small pieces they share.

mod icon;
mod status_message;
mod typing_animation;
mod social_links;
mod header;
mod hero_section;
mod about_section;
mod skills_section;
mod projects_section;
mod contact_section;
mod footer;
mod scroll_button;

pub use header::Header;
pub use hero_section::HeroSection;
pub use about_section::AboutSection;
pub use skills_section::SkillsSection;
pub use projects_section::ProjectsSection;
pub use contact_section::ContactSection;
pub use footer::Footer;
pub use scroll_button::ScrollButton;
