//! Projects Section Component
//!
//! Category filter bar over the projects collection. The collection is
//! read once; switching filters only re-slices what is already loaded.

use leptos::prelude::*;
use portfolio_core::filter::{filter_projects, ProjectFilter, ALL_FILTER, FILTERS};
use portfolio_core::icons::Icon;
use portfolio_core::{Placeholders, Presentation, Project};

use super::icon::IconView;
use super::status_message::{placeholder_view, StatusMessage};
use crate::hooks::use_projects;

#[component]
fn FilterButton(
    filter: ProjectFilter,
    active_filter: ReadSignal<String>,
    set_active_filter: WriteSignal<String>,
) -> impl IntoView {
    let is_active = move || active_filter.with(|active| active.as_str() == filter.id);

    view! {
        <button
            class=move || if is_active() { "filter-button active" } else { "filter-button" }
            aria-pressed=move || is_active().to_string()
            on:click=move |_| set_active_filter.set(filter.id.to_string())
        >
            <IconView icon=filter.icon />
            {filter.label}
        </button>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let kind = project.kind.clone();

    view! {
        <article
            class=format!("project-card tone-{}", kind.tone())
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <header class="project-card-header">
                <span class="project-type">
                    <IconView icon=kind.icon() />
                    {kind.label().to_string()}
                </span>
                <span class="project-year">{format!("Developed in {}", project.year)}</span>
            </header>

            <h3 class="project-title">{project.title}</h3>
            <p class="project-description">{project.description}</p>

            <ul class="project-tech">
                {project.tech.into_iter().map(|tech| view! { <li class="tech-pill">{tech}</li> }).collect_view()}
            </ul>

            <footer class="project-links">
                {project.github_url.map(|url| view! {
                    <a class="project-link" href=url target="_blank" rel="noopener noreferrer">
                        <IconView icon=Icon::Github />
                        {move || if hovered.get() { "View Code" } else { "Code" }}
                    </a>
                })}
                {project.live_url.map(|url| view! {
                    <a class="project-link" href=url target="_blank" rel="noopener noreferrer">
                        <IconView icon=Icon::ExternalLink />
                        "Demo"
                    </a>
                })}
            </footer>
        </article>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = use_projects();
    let (active_filter, set_active_filter) = signal(ALL_FILTER.to_string());

    let visible = Memo::new(move |_| {
        projects.with(|state| {
            state
                .data()
                .map(|items| active_filter.with(|filter| filter_projects(items, filter)))
                .unwrap_or_default()
        })
    });

    view! {
        <section id="projects" class="section projects-section">
            <div class="section-inner">
                <h2 class="section-title">"Featured Projects"</h2>
                <p class="section-subtitle">
                    "A selection of apps and sites I've built across mobile, web and beyond."
                </p>

                {move || projects.with(|state| match state.presentation() {
                    Presentation::Items(_) => view! {
                        <div class="filter-bar" role="toolbar">
                            {FILTERS.iter().map(|filter| view! {
                                <FilterButton
                                    filter=*filter
                                    active_filter=active_filter
                                    set_active_filter=set_active_filter
                                />
                            }).collect_view()}
                        </div>

                        <Show
                            when=move || visible.with(|items| !items.is_empty())
                            fallback=|| view! { <StatusMessage message=Placeholders::PROJECTS.empty /> }
                        >
                            <div class="projects-grid">
                                <For
                                    each=move || visible.get()
                                    key=|project| project.id.clone()
                                    children=|project| view! { <ProjectCard project=project /> }
                                />
                            </div>
                        </Show>
                    }.into_any(),
                    other => placeholder_view(Placeholders::PROJECTS, &other).into_any(),
                })}
            </div>
        </section>
    }
}
