//! Portfolio App
//!
//! Root component: provides the site context and UI store, then lays out
//! the page sections in navigation order.

use leptos::prelude::*;
use portfolio_core::SiteConfig;
use reactive_stores::Store;

use crate::components::{
    AboutSection, ContactSection, Footer, Header, HeroSection, ProjectsSection, ScrollButton,
    SkillsSection,
};
use crate::context::SiteContext;
use crate::hooks::use_viewport_tracking;
use crate::store::UiState;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    // One source handle for every collection on the page
    provide_context(SiteContext::new(config));

    let store = Store::new(UiState::default());
    provide_context(store);
    use_viewport_tracking(store);

    view! {
        <div class="site">
            <Header />
            <main class="main-content">
                <HeroSection />
                <AboutSection />
                <SkillsSection />
                <ProjectsSection />
                <ContactSection />
            </main>
            <Footer />
            <ScrollButton />
        </div>
    }
}
