//! Viewport Helpers
//!
//! Scroll and size thresholds used by the header, scroll button and layout.

/// Header switches to its solid style past this many pixels
pub const HEADER_SCROLL_THRESHOLD: f64 = 20.0;
/// Scroll button points down while above this
pub const AT_TOP_THRESHOLD: f64 = 50.0;
/// Look-ahead when deciding which section is active
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
pub const LARGE_SCREEN_BREAKPOINT: f64 = 1024.0;

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn is_at_top(scroll_y: f64) -> bool {
    scroll_y < AT_TOP_THRESHOLD
}

pub fn is_large_screen(width: f64, breakpoint: f64) -> bool {
    width >= breakpoint
}

/// Measured position of a page section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section containing `scroll_y + ACTIVE_SECTION_OFFSET`
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let marker = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .find(|section| section.contains(marker))
        .map(|section| section.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("hero", 0.0, 800.0), ("about", 800.0, 600.0), ("skills", 1400.0, 500.0)]
            .iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top: *top,
                height: *height,
            })
            .collect()
    }

    #[test]
    fn test_thresholds() {
        assert!(!is_scrolled(20.0, HEADER_SCROLL_THRESHOLD));
        assert!(is_scrolled(21.0, HEADER_SCROLL_THRESHOLD));
        assert!(is_at_top(49.0));
        assert!(!is_at_top(50.0));
        assert!(is_large_screen(1024.0, LARGE_SCREEN_BREAKPOINT));
        assert!(!is_large_screen(1023.0, LARGE_SCREEN_BREAKPOINT));
    }

    #[test]
    fn test_active_section_uses_offset() {
        let sections = sections();
        assert_eq!(active_section(0.0, &sections), Some("hero"));
        assert_eq!(active_section(699.0, &sections), Some("hero"));
        assert_eq!(active_section(700.0, &sections), Some("about"));
        assert_eq!(active_section(1350.0, &sections), Some("skills"));
    }

    #[test]
    fn test_past_last_section() {
        assert_eq!(active_section(5000.0, &sections()), None);
        assert_eq!(active_section(0.0, &[]), None);
    }
}
