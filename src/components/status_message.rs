//! Collection Status Message
//!
//! The loading / error / empty line shown in place of a collection.

use leptos::prelude::*;
use portfolio_core::{Placeholders, Presentation};

#[component]
pub fn StatusMessage(
    message: &'static str,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    view! {
        <p class=if error { "status-message error" } else { "status-message" } role="status">
            {message}
        </p>
    }
}

/// Placeholder view for a non-list presentation, `None` when there are items
pub fn placeholder_view<T>(placeholders: Placeholders, presentation: &Presentation<'_, T>) -> Option<AnyView> {
    let error = matches!(presentation, Presentation::Error);
    placeholders
        .message_for(presentation)
        .map(|message| view! { <StatusMessage message=message error=error /> }.into_any())
}
