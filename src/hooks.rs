//! Data and Viewport Hooks
//!
//! Each collection hook issues exactly one read per mount and ignores a
//! result that arrives after its component has been torn down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::content::NAV_ITEMS;
use portfolio_core::typing::{Typewriter, TypingOptions};
use portfolio_core::viewport::{active_section, is_large_screen};
use portfolio_core::{
    CollectionSpec, ContactInfo, Document, LoadState, Project, RetrievalError, SocialLink,
};

use crate::context::use_site;
use crate::dom;
use crate::store::{UiStateStoreFields, UiStore};

// ========================
// Mount Guard
// ========================

/// Cleared when the owning component is cleaned up
#[derive(Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        let mounted = Arc::new(AtomicBool::new(true));
        let flag = mounted.clone();
        on_cleanup(move || flag.store(false, Ordering::Release));
        Self(mounted)
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// ========================
// Collections
// ========================

/// Load `spec` once and expose its state
pub fn use_collection<T: Document>(spec: CollectionSpec) -> ReadSignal<LoadState<T>> {
    let site = use_site();
    let (state, set_state) = signal(LoadState::<T>::Loading);
    let guard = MountGuard::new();

    Effect::new(move |_| {
        let reader = site.reader.clone();
        let spec = spec.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = reader.load_ordered::<T>(&spec).await;
            if !deliver(&guard, set_state, result) {
                tracing::debug!(collection = %spec.collection, "result not applied");
            }
        });
    });

    state
}

/// Settle the state with `result` unless the view is gone or already settled
fn deliver<T: Document>(
    guard: &MountGuard,
    set_state: WriteSignal<LoadState<T>>,
    result: Result<Vec<T>, RetrievalError>,
) -> bool {
    if !guard.is_mounted() {
        return false;
    }
    let mut applied = false;
    set_state.update(|state| applied = state.settle(result));
    applied
}

pub fn use_social_links() -> ReadSignal<LoadState<SocialLink>> {
    let name = use_site().config.collections.social_links.clone();
    use_collection(CollectionSpec::for_document::<SocialLink>(name))
}

pub fn use_projects() -> ReadSignal<LoadState<Project>> {
    let name = use_site().config.collections.projects.clone();
    use_collection(CollectionSpec::for_document::<Project>(name))
}

pub fn use_contact_info() -> ReadSignal<LoadState<ContactInfo>> {
    let name = use_site().config.collections.contact_info.clone();
    use_collection(CollectionSpec::for_document::<ContactInfo>(name))
}

// ========================
// Viewport
// ========================

/// Keep the store's scroll position, active section and width current
pub fn use_viewport_tracking(store: UiStore) {
    let sync_scroll = move || {
        let y = dom::scroll_y();
        store.scroll_y().set(y);

        let sections = dom::measure_sections(NAV_ITEMS.iter().map(|(_, id)| *id));
        let active = active_section(y, &sections).map(str::to_string);
        if store.active_section().get_untracked() != active {
            store.active_section().set(active);
        }
    };
    let sync_width = move || store.viewport_width().set(dom::viewport_width());

    // Sections only exist once the view is mounted
    Effect::new(move |_| {
        sync_scroll();
        sync_width();
    });

    let scroll = window_event_listener(ev::scroll, move |_| sync_scroll());
    let resize = window_event_listener(ev::resize, move |_| {
        sync_width();
        sync_scroll();
    });
    on_cleanup(move || {
        scroll.remove();
        resize.remove();
    });
}

pub fn use_is_large_screen(store: UiStore, breakpoint: f64) -> Memo<bool> {
    Memo::new(move |_| is_large_screen(store.viewport_width().get(), breakpoint))
}

// ========================
// Typing
// ========================

/// Drive a `Typewriter` from timers owned by the calling component
pub fn use_typewriter(text: String, options: TypingOptions) -> ReadSignal<Typewriter> {
    let (typer, set_typer) = signal(Typewriter::new(&text, options.keep_cursor));
    let guard = MountGuard::new();

    let typing = guard.clone();
    spawn_local(async move {
        TimeoutFuture::new(options.start_delay_ms).await;
        loop {
            TimeoutFuture::new(options.speed_ms).await;
            if !typing.is_mounted() {
                return;
            }
            let mut advanced = false;
            set_typer.update(|t| advanced = t.tick());
            if !advanced {
                break;
            }
        }
    });

    spawn_local(async move {
        loop {
            TimeoutFuture::new(options.cursor_blink_ms).await;
            if !guard.is_mounted() {
                return;
            }
            let done = typer.with_untracked(|t| !t.shows_cursor());
            if done {
                break;
            }
            set_typer.update(Typewriter::blink);
        }
    });

    typer
}
