//! Skills Section Component

use leptos::prelude::*;
use portfolio_core::content::{SkillCategory, SKILL_CATEGORIES};

use super::icon::IconView;

#[component]
fn SkillCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <article class="skill-card">
            <header class="skill-card-header">
                <IconView icon=category.icon />
                <h3>{category.title}</h3>
            </header>
            <ul class="skill-list">
                {category.skills.iter().map(|skill| view! { <li class="skill">{*skill}</li> }).collect_view()}
            </ul>
        </article>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="section skills-section">
            <div class="section-inner">
                <h2 class="section-title">"Skills & Expertise"</h2>
                <p class="section-subtitle">
                    "Technologies and tools I use to bring ideas to life."
                </p>
                <div class="skills-grid">
                    {SKILL_CATEGORIES.iter().map(|category| view! { <SkillCard category=category /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
