//! DOM Helpers
//!
//! Thin wrappers over `web_sys` for scrolling and measuring the page.

use leptos::prelude::{document, window};
use portfolio_core::viewport::SectionBounds;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smooth-scroll the element with `id` into view
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        tracing::debug!(id, "no section to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Offsets of the sections that are currently in the document
pub fn measure_sections<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<SectionBounds> {
    let document = document();
    ids.into_iter()
        .filter_map(|id| {
            let element = document
                .get_element_by_id(id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: id.to_string(),
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
