//! Locally held copy of a collection as last delivered by the store.

use serde::Serialize;

/// Items are ordered newest first, exactly as the store query returned them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot<T> {
    pub items: Vec<T>,
    /// `true` until the first load completes (successfully or not).
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Snapshot<T> {
    /// The state before the first load.
    #[must_use]
    pub fn loading() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }

    #[must_use]
    pub fn loaded(items: Vec<T>) -> Self {
        Self { items, loading: false, error: None }
    }

    /// Shown instead of the item list once loading is done and nothing exists.
    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::loading()
    }
}
