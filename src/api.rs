//! HTTP client for the items backend.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Backend`]. On writes the backend may
//! explain itself in the body (`{"error"}` or `{"detail"}`); when it does not,
//! or when the body is not JSON, the HTTP reason phrase stands in. Transport
//! and decode failures pass through as [`ApiError::Http`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ApiError;
use crate::types::{DbStatus, ErrorBody, Item, NewItem};

const ITEMS_PATH: &str = "/items";
const DB_STATUS_PATH: &str = "/db_status";

/// Client for the items REST backend.
///
/// Holds the base URL and a reusable connection pool; one instance serves the
/// whole process.
pub struct ItemsClient {
    base_url: String,
    http: reqwest::Client,
}

impl ItemsClient {
    /// Build a client for `base_url`. Trailing slashes are tolerated.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the full item collection via `GET {base}/items`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] on transport or decode failure, [`ApiError::Backend`]
    /// for any non-2xx status.
    pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let url = endpoint(&self.base_url, ITEMS_PATH);
        tracing::debug!(%url, "list items");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(backend_error(status, None));
        }
        Ok(response.json::<Vec<Item>>().await?)
    }

    /// Create an item via `POST {base}/items` and return the backend's echo
    /// of the created record.
    ///
    /// The name is trimmed first; an empty result is rejected locally and no
    /// request is sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::EmptyName`] for a blank name, [`ApiError::Backend`] for a
    /// non-2xx status (carrying the body's `error`/`detail` message when one
    /// parses), [`ApiError::Http`] otherwise.
    pub async fn add_item(&self, name: &str) -> Result<Item, ApiError> {
        let name = validated_name(name).ok_or(ApiError::EmptyName)?;
        let url = endpoint(&self.base_url, ITEMS_PATH);
        tracing::debug!(%url, name, "add item");
        let body = NewItem { name: name.to_owned() };
        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .json::<ErrorBody>()
                .await
                .unwrap_or_default();
            return Err(backend_error(status, body.message()));
        }
        Ok(response.json::<Item>().await?)
    }

    /// Query backend/database reachability via `GET /db_status`.
    ///
    /// The backend serves this diagnostic at the server root, not under the
    /// API prefix, so the request targets the origin of the base URL.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ItemsClient::list_items`].
    pub async fn db_status(&self) -> Result<DbStatus, ApiError> {
        let url = endpoint(&origin(&self.base_url), DB_STATUS_PATH);
        tracing::debug!(%url, "db status");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(backend_error(status, None));
        }
        Ok(response.json::<DbStatus>().await?)
    }
}

/// Join a base URL and a path, normalizing any trailing slash on the base.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Server origin (scheme + authority) of a base URL, dropping any path
/// component such as `/api`.
fn origin(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    let Some(scheme_end) = trimmed.find("://") else {
        return trimmed.to_owned();
    };
    let authority_start = scheme_end + 3;
    match trimmed[authority_start..].find('/') {
        Some(path_start) => trimmed[..authority_start + path_start].to_owned(),
        None => trimmed.to_owned(),
    }
}

/// Trim a submitted item name; `None` means the submission is empty.
fn validated_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Build the non-2xx error, falling back to the HTTP reason phrase when the
/// body offered no message.
fn backend_error(status: reqwest::StatusCode, body_message: Option<&str>) -> ApiError {
    let message = body_message
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error"))
        .to_owned();
    ApiError::Backend {
        status: status.as_u16(),
        message,
    }
}
