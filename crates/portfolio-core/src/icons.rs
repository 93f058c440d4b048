//! Icon Lookup
//!
//! Which glyph a social link or project category is drawn with. The SVG
//! outlines live in the site crate; this module only decides the mapping.

/// Glyphs used across the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    Phone,
    MapPin,
    Clock,
    Android,
    World,
    ArrowsCross,
    DeviceDesktop,
    DeviceLaptop,
    Stack,
    Server,
    Database,
    Brain,
    Sparkles,
    CodeCircle,
    ChevronDown,
    ChevronUp,
    Menu,
    Close,
    ExternalLink,
    Download,
    Send,
}

/// Icon for a social/contact label, case-insensitive
///
/// Unknown labels have no icon; callers render nothing for them.
pub fn icon_for_label(label: &str) -> Option<Icon> {
    match label.trim().to_lowercase().as_str() {
        "github" => Some(Icon::Github),
        "linkedin" => Some(Icon::Linkedin),
        "gmail" | "email" => Some(Icon::Mail),
        "phone" => Some(Icon::Phone),
        "location" => Some(Icon::MapPin),
        "response time" => Some(Icon::Clock),
        _ => None,
    }
}
