//! Source store adapters implementing [`SourceStore`].
//!
//! Records are always held behind an `Arc` that is replaced, never mutated,
//! so snapshot identity tracks every update.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use leptos::*;

use crate::domain::sources::SourceStore;

/// Reactive store backed by Leptos signals. Reads through [`SourceStore`] are
/// tracked, so a memo deriving from it reruns when the store changes.
pub struct SignalSourceStore<R: 'static> {
    records: RwSignal<Arc<Vec<R>>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl<R: 'static> Clone for SignalSourceStore<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for SignalSourceStore<R> {}

impl<R: 'static> SignalSourceStore<R> {
    pub fn new() -> Self {
        Self {
            records: create_rw_signal(Arc::new(Vec::new())),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    /// Replace the collection; clears loading and error state
    pub fn set_records(&self, records: Vec<R>) {
        batch(|| {
            self.records.set(Arc::new(records));
            self.loading.set(false);
            self.error.set(None);
        });
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.loading.set(is_loading);
    }

    pub fn begin_loading(&self) {
        batch(|| {
            self.loading.set(true);
            self.error.set(None);
        });
    }

    /// Record a failed refresh. The last good records stay in the store, but
    /// the error flag zeroes the KPI set until the next successful load.
    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        batch(|| {
            self.loading.set(false);
            self.error.set(Some(message));
        });
    }

    pub fn error(&self) -> Option<String> {
        self.error.get_untracked()
    }
}

impl<R: 'static> Default for SignalSourceStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> SourceStore<R> for SignalSourceStore<R> {
    fn records(&self) -> Arc<Vec<R>> {
        self.records.get()
    }

    fn is_loading(&self) -> bool {
        self.loading.get()
    }

    fn has_error(&self) -> bool {
        self.error.with(Option::is_some)
    }
}

/// Plain single-threaded store for tests and non-reactive callers
pub struct InMemorySourceStore<R> {
    records: RefCell<Arc<Vec<R>>>,
    loading: Cell<bool>,
    failed: Cell<bool>,
}

impl<R> InMemorySourceStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: RefCell::new(Arc::new(records)),
            loading: Cell::new(false),
            failed: Cell::new(false),
        }
    }

    pub fn loading() -> Self {
        let store = Self::new(Vec::new());
        store.set_loading(true);
        store
    }

    /// Replace the collection; clears loading and failure state
    pub fn set_records(&self, records: Vec<R>) {
        *self.records.borrow_mut() = Arc::new(records);
        self.loading.set(false);
        self.failed.set(false);
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.loading.set(is_loading);
    }

    pub fn set_failed(&self, failed: bool) {
        self.failed.set(failed);
    }
}

impl<R> Default for InMemorySourceStore<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R> SourceStore<R> for InMemorySourceStore<R> {
    fn records(&self) -> Arc<Vec<R>> {
        Arc::clone(&self.records.borrow())
    }

    fn is_loading(&self) -> bool {
        self.loading.get()
    }

    fn has_error(&self) -> bool {
        self.failed.get()
    }
}
