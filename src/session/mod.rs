//! Session-scoped persistence for navigational state.
//!
//! This module provides the small key-value store that keeps the list view's
//! page number and search text alive across plugin reloads within one Zellij
//! session. The backing file lives under the plugin's `/tmp` mount, which
//! Zellij clears when the session ends, giving exactly session-lifetime
//! scope without any explicit expiry logic.
//!
//! # Modules
//!
//! - `backend`: Store trait abstraction over raw string values
//! - `json`: JSON file-based store with atomic writes
//! - `keys`: Typed keys with per-key serialize/deserialize pairs and defaults

pub mod backend;
pub mod json;
pub mod keys;

pub use backend::SessionStore;
pub use json::JsonSessionStore;
pub use keys::{SessionKey, SessionValue, PAGE, SEARCH_TEXT};
