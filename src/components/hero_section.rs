//! Hero Section Component
//!
//! Typed-out name, role, calls to action and the stats strip.

use leptos::prelude::*;
use portfolio_core::content::{HERO_TAGLINE, HERO_TECH, STATS};
use portfolio_core::icons::Icon;
use portfolio_core::typing::TypingOptions;

use super::icon::IconView;
use super::social_links::SocialLinks;
use super::typing_animation::TypingAnimation;
use crate::context::use_site;
use crate::dom;

#[component]
pub fn HeroSection() -> impl IntoView {
    let site = use_site();
    let settings = &site.config.site;

    let typing = TypingOptions {
        start_delay_ms: 100,
        keep_cursor: true,
        ..TypingOptions::default()
    };

    view! {
        <section id="hero" class="section hero-section">
            <div class="section-inner hero-inner">
                <span class="hero-badge">"Available for opportunities"</span>
                <p class="hero-greeting">"Hi, I'm"</p>
                <h1 class="hero-name">
                    <TypingAnimation text=settings.owner.clone() options=typing />
                </h1>
                <h2 class="hero-role">{settings.role.clone()}</h2>
                <p class="hero-tagline">{HERO_TAGLINE}</p>

                <ul class="hero-tech">
                    {HERO_TECH.iter().map(|(name, tone)| view! {
                        <li class=format!("tech-pill tone-{}", tone)>{*name}</li>
                    }).collect_view()}
                </ul>

                <div class="hero-actions">
                    <button class="button primary" on:click=move |_| dom::scroll_to_section("projects")>
                        "View My Work"
                    </button>
                    <a class="button secondary" href=settings.resume_url.clone() download>
                        <IconView icon=Icon::Download />
                        "Download Resume"
                    </a>
                </div>

                <SocialLinks class="hero-social" />

                <dl class="stats">
                    {STATS.iter().map(|(count, label)| view! {
                        <div class="stat">
                            <dt class="stat-count">{*count}</dt>
                            <dd class="stat-label">{*label}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </div>
        </section>
    }
}
