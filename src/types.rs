//! Wire DTOs for the items backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. The backend owns the records; nothing here is mutated after
//! deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An item as returned by `GET {base}/items`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Display name supplied at creation.
    pub name: String,
    /// Creation timestamp, preformatted by the backend
    /// (`YYYY-MM-DD HH:MM:SS`). Kept as a string; the client only displays it.
    pub created_at: String,
}

/// Request body for `POST {base}/items`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    /// Trimmed, non-empty item name.
    pub name: String,
}

/// Error payload shape for non-2xx responses.
///
/// The backend is inconsistent about which field carries the message, so both
/// are optional and [`ErrorBody::message`] picks whichever is present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Message under the `error` key, if present.
    #[serde(default)]
    pub error: Option<String>,
    /// Message under the `detail` key, if present.
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// The human-readable message, preferring `error` over `detail`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().or(self.detail.as_deref())
    }
}

/// Response body of `GET {base}/db_status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStatus {
    /// Short machine-readable outcome (e.g. `"successo"`).
    pub status: String,
    /// Human-readable description of the backend/database state.
    pub message: String,
    /// Database server version string, when the backend could query it.
    #[serde(default)]
    pub db_version: Option<String>,
}
