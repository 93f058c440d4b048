//! About Section Component

use leptos::prelude::*;
use portfolio_core::content::{ABOUT_FOCUS, ABOUT_HIGHLIGHTS, ABOUT_PARAGRAPHS, ABOUT_PHILOSOPHY};

use super::social_links::SocialLinks;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section about-section">
            <div class="section-inner">
                <h2 class="section-title">"About Me"</h2>

                <div class="about-grid">
                    <div class="about-text">
                        {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}

                        <div class="about-card">
                            <h3>"My Philosophy"</h3>
                            <p>{ABOUT_PHILOSOPHY}</p>
                        </div>
                        <div class="about-card">
                            <h3>"Current Focus"</h3>
                            <p>{ABOUT_FOCUS}</p>
                        </div>

                        <SocialLinks class="about-social" />
                    </div>

                    <ul class="highlights">
                        {ABOUT_HIGHLIGHTS.iter().map(|(label, description)| view! {
                            <li class="highlight">
                                <h4>{*label}</h4>
                                <p>{*description}</p>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
