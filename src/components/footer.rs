//! Footer Component

use leptos::prelude::*;

use super::social_links::SocialLinks;
use crate::context::use_site;
use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let owner = use_site().config.site.owner.clone();
    let year = dom::current_year();

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <SocialLinks class="footer-social" />
                <p class="copyright">{format!("© {} {}. All rights reserved.", year, owner)}</p>
                <p class="built-with">"Built with Rust and Leptos."</p>
            </div>
        </footer>
    }
}
