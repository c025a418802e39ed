//! Row construction and text rendering for the item list.
//!
//! Pure functions over [`BrowserState`] so display logic stays testable
//! without any I/O.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::state::BrowserState;
use crate::types::Item;

/// One line of rendered list output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    /// A real item: name, id, and creation timestamp.
    Item {
        id: i64,
        name: String,
        created_at: String,
    },
    /// Placeholder while a load is in flight.
    Loading,
    /// Placeholder for an empty collection.
    NoItems,
    /// Placeholder after a failed load.
    LoadFailed,
}

impl Row {
    /// Build an item row from a wire record.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self::Item {
            id: item.id,
            name: item.name.clone(),
            created_at: item.created_at.clone(),
        }
    }
}

/// Build the display rows for the current state.
///
/// Exactly one placeholder row stands in for the loading, failed, and empty
/// cases; otherwise one row per item in backend order.
#[must_use]
pub fn rows(state: &BrowserState) -> Vec<Row> {
    if state.loading {
        return vec![Row::Loading];
    }
    if state.load_failed {
        return vec![Row::LoadFailed];
    }
    if state.items.is_empty() {
        return vec![Row::NoItems];
    }
    state.items.iter().map(Row::from_item).collect()
}

/// Render one row as a terminal line.
#[must_use]
pub fn render_row(row: &Row) -> String {
    match row {
        Row::Item {
            id,
            name,
            created_at,
        } => format!("{name} (ID: {id}) created: {created_at}"),
        Row::Loading => "loading...".to_owned(),
        Row::NoItems => "no items found".to_owned(),
        Row::LoadFailed => "failed to load items".to_owned(),
    }
}
