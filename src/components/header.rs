//! Header Component
//!
//! Fixed navigation bar. Solid once the page has scrolled, inline links on
//! large screens, a drawer behind a menu button otherwise.

use leptos::prelude::*;
use portfolio_core::content::NAV_ITEMS;
use portfolio_core::icons::Icon;
use portfolio_core::viewport::{is_scrolled, HEADER_SCROLL_THRESHOLD, LARGE_SCREEN_BREAKPOINT};

use super::icon::IconView;
use crate::context::use_site;
use crate::dom;
use crate::hooks::use_is_large_screen;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Navigation links, shared by the desktop bar and the drawer
#[component]
fn NavLinks() -> impl IntoView {
    let store = use_ui_store();

    NAV_ITEMS
        .iter()
        .map(|(label, id)| {
            let id = *id;
            let is_active = move || store.active_section().get().as_deref() == Some(id);
            let go = move |_| {
                store.menu_open().set(false);
                dom::scroll_to_section(id);
            };
            view! {
                <button
                    class=move || if is_active() { "nav-link active" } else { "nav-link" }
                    on:click=go
                >
                    {*label}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn Header() -> impl IntoView {
    let site = use_site();
    let store = use_ui_store();
    let large = use_is_large_screen(store, LARGE_SCREEN_BREAKPOINT);

    let header_class = move || {
        if is_scrolled(store.scroll_y().get(), HEADER_SCROLL_THRESHOLD) {
            "site-header scrolled"
        } else {
            "site-header"
        }
    };

    // Drawer state is meaningless once the bar shows inline links
    Effect::new(move |_| {
        if large.get() {
            store.menu_open().set(false);
        }
    });

    let owner = site.config.site.owner.clone();

    view! {
        <header class=header_class>
            <div class="header-inner">
                <button class="brand" on:click=move |_| dom::scroll_to_section("hero")>
                    {owner}
                </button>

                <Show
                    when=move || large.get()
                    fallback=move || view! {
                        <button
                            class="menu-toggle"
                            aria-label=move || if store.menu_open().get() { "Close menu" } else { "Open menu" }
                            on:click=move |_| store.menu_open().update(|open| *open = !*open)
                        >
                            {move || if store.menu_open().get() {
                                view! { <IconView icon=Icon::Close /> }.into_any()
                            } else {
                                view! { <IconView icon=Icon::Menu /> }.into_any()
                            }}
                        </button>
                    }
                >
                    <nav class="nav-links">
                        <NavLinks />
                    </nav>
                </Show>
            </div>

            <Show when=move || store.menu_open().get() && !large.get()>
                <nav class="nav-drawer">
                    <NavLinks />
                </nav>
            </Show>
        </header>
    }
}
