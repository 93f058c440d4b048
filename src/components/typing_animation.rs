//! Typing Animation Component

use leptos::prelude::*;
use portfolio_core::typing::{Typewriter, TypingOptions};

use crate::hooks::use_typewriter;

/// Types `text` out one character at a time behind a blinking cursor
#[component]
pub fn TypingAnimation(
    #[prop(into)] text: String,
    #[prop(optional)] options: TypingOptions,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let typer = use_typewriter(text, options);

    view! {
        <span class=format!("typing {}", class)>
            {move || typer.with(Typewriter::visible)}
            <Show when=move || typer.with(Typewriter::shows_cursor)>
                <span
                    class=move || if typer.with(Typewriter::cursor_lit) { "typing-cursor" } else { "typing-cursor dim" }
                    aria-hidden="true"
                >
                    "|"
                </span>
            </Show>
        </span>
    }
}
