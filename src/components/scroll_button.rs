//! Scroll Button Component
//!
//! Points down as a hint while the page is at the top, then becomes a
//! back-to-top button.

use leptos::prelude::*;
use portfolio_core::icons::Icon;
use portfolio_core::viewport::is_at_top;

use super::icon::IconView;
use crate::dom;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ScrollButton() -> impl IntoView {
    let store = use_ui_store();
    let at_top = move || is_at_top(store.scroll_y().get());

    view! {
        <button
            class=move || if at_top() { "scroll-button hint" } else { "scroll-button" }
            aria-label=move || if at_top() { "Scroll indicator" } else { "Back to top" }
            on:click=move |_| {
                if !at_top() {
                    dom::scroll_to_top();
                }
            }
        >
            {move || if at_top() {
                view! { <IconView icon=Icon::ChevronDown /> }.into_any()
            } else {
                view! { <IconView icon=Icon::ChevronUp /> }.into_any()
            }}
        </button>
    }
}
