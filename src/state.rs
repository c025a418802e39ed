//! Browser view state for the item list.
//!
//! DESIGN
//! ======
//! The transitions mirror what the page does around each network call: show a
//! loading placeholder while a fetch is in flight, replace the list on
//! success, swap in an error placeholder on failure, and clear the pending
//! input once an add is acknowledged. The state holds nothing durable; every
//! load replaces the whole collection.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::types::Item;

/// Client-side view state for the item browser.
#[derive(Clone, Debug, Default)]
pub struct BrowserState {
    /// Items in backend order from the last successful load.
    pub items: Vec<Item>,
    /// A load is in flight.
    pub loading: bool,
    /// The last load failed; the list shows an error placeholder.
    pub load_failed: bool,
    /// An add is in flight.
    pub add_pending: bool,
    /// The submitted name awaiting acknowledgment (the "input box" content).
    pub pending_name: Option<String>,
    /// Last surfaced error message, if any.
    pub error: Option<String>,
}

impl BrowserState {
    /// Start a load: show the loading placeholder and clear the last error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.load_failed = false;
        self.error = None;
    }

    /// Complete a load with the fetched collection.
    pub fn finish_load(&mut self, items: Vec<Item>) {
        self.items = items;
        self.loading = false;
    }

    /// Record a failed load: the list is cleared and an error is surfaced.
    pub fn fail_load(&mut self, message: String) {
        self.items.clear();
        self.loading = false;
        self.load_failed = true;
        self.error = Some(message);
    }

    /// Start an add for the given already-validated name.
    pub fn begin_add(&mut self, name: &str) {
        self.add_pending = true;
        self.pending_name = Some(name.to_owned());
        self.error = None;
    }

    /// Complete an add: the pending input is cleared. The caller follows up
    /// with a reload to reflect the new collection.
    pub fn finish_add(&mut self) {
        self.add_pending = false;
        self.pending_name = None;
    }

    /// Record a failed add. The current list stays as-is; only the error
    /// message changes.
    pub fn fail_add(&mut self, message: String) {
        self.add_pending = false;
        self.error = Some(message);
    }
}
