//! Client library for an "items" REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the wire schema, `state`
//! tracks what the browser view is showing, and `view` turns that state into
//! display rows. The binary in `main.rs` is a thin subcommand dispatcher on
//! top of these modules.

pub mod api;
pub mod error;
pub mod state;
pub mod types;
pub mod view;
