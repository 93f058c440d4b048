//! Collection Load State
//!
//! What a data hook exposes to its component: `Loading` until the single
//! read settles, then `Loaded` or `Failed` for the rest of the mount.

use crate::error::RetrievalError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(Vec<T>),
    Failed(RetrievalError),
}

/// Which of the four things a collection view shows
#[derive(Debug, PartialEq)]
pub enum Presentation<'a, T> {
    Loading,
    Error,
    Empty,
    Items(&'a [T]),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&[T]> {
        match self {
            LoadState::Loaded(items) => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RetrievalError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Record the outcome of the read. Only the first result counts;
    /// returns whether this one was applied.
    pub fn settle(&mut self, result: Result<Vec<T>, RetrievalError>) -> bool {
        if self.is_terminal() {
            return false;
        }
        *self = match result {
            Ok(items) => LoadState::Loaded(items),
            Err(err) => LoadState::Failed(err),
        };
        true
    }

    pub fn presentation(&self) -> Presentation<'_, T> {
        match self {
            LoadState::Loading => Presentation::Loading,
            LoadState::Failed(_) => Presentation::Error,
            LoadState::Loaded(items) if items.is_empty() => Presentation::Empty,
            LoadState::Loaded(items) => Presentation::Items(items),
        }
    }
}

/// Placeholder copy for one collection's non-list states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    pub loading: &'static str,
    pub error: &'static str,
    pub empty: &'static str,
}

impl Placeholders {
    pub const SOCIAL_LINKS: Placeholders = Placeholders {
        loading: "Loading social links...",
        error: "Error loading social links.",
        empty: "No social links available.",
    };

    pub const PROJECTS: Placeholders = Placeholders {
        loading: "Loading projects...",
        error: "Error loading projects.",
        empty: "No projects found.",
    };

    pub const CONTACT_INFO: Placeholders = Placeholders {
        loading: "Loading contact info...",
        error: "Error loading contact info.",
        empty: "No contact info available.",
    };

    /// Message for a non-list presentation; `None` when there are items
    pub fn message_for<T>(&self, presentation: &Presentation<'_, T>) -> Option<&'static str> {
        match presentation {
            Presentation::Loading => Some(self.loading),
            Presentation::Error => Some(self.error),
            Presentation::Empty => Some(self.empty),
            Presentation::Items(_) => None,
        }
    }
}
