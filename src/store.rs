//! UI State Store
//!
//! Scroll position, viewport width and menu state, shared through a
//! reactive_stores `Store` so each consumer only tracks the field it reads.

use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Last observed `window.scrollY`
    pub scroll_y: f64,
    /// Last observed `window.innerWidth`
    pub viewport_width: f64,
    /// Section id the reader is currently looking at
    pub active_section: Option<String>,
    /// Mobile navigation drawer
    pub menu_open: bool,
}

pub type UiStore = Store<UiState>;

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}
