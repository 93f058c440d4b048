//! Social Links Component
//!
//! Icon row backed by the social links collection. Used in the hero, about,
//! contact and footer sections; each placement loads its own copy.

use leptos::prelude::*;
use portfolio_core::format::to_title_case;
use portfolio_core::icons::icon_for_label;
use portfolio_core::{Placeholders, Presentation, SocialLink};

use super::icon::IconView;
use super::status_message::placeholder_view;
use crate::hooks::use_social_links;

#[component]
fn SocialLinkButton(link: SocialLink, show_username: bool) -> impl IntoView {
    let title = to_title_case(&link.label);
    let icon = icon_for_label(&link.label);
    let label = title.clone();

    view! {
        <a
            class="social-link"
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            title=title.clone()
            aria-label=title
        >
            {icon.map(|icon| view! { <IconView icon=icon /> })}
            {show_username.then(|| view! {
                <span class="social-link-text">
                    <span class="social-link-label">{label}</span>
                    {link.username.map(|username| view! {
                        <span class="social-link-username">{username}</span>
                    })}
                </span>
            })}
        </a>
    }
}

#[component]
pub fn SocialLinks(
    /// Show label and username next to each icon
    #[prop(optional)] show_usernames: bool,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let links = use_social_links();

    view! {
        <div class=format!("social-links {}", class)>
            {move || links.with(|state| match state.presentation() {
                Presentation::Items(items) => items
                    .iter()
                    .cloned()
                    .map(|link| view! { <SocialLinkButton link=link show_username=show_usernames /> })
                    .collect_view()
                    .into_any(),
                other => placeholder_view(Placeholders::SOCIAL_LINKS, &other).into_any(),
            })}
        </div>
    }
}
