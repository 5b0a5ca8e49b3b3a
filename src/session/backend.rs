//! Session store abstraction.
//!
//! This module defines the [`SessionStore`] trait that abstracts over the
//! persistence backend for session-scoped state. Values cross this boundary
//! as raw strings; typed access with defaults is layered on top by
//! [`crate::session::keys`].
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal: two operations, string in, string
//! out. Every value is round-tripped through a per-key serialize/deserialize
//! pair so non-string types (the page number) survive storage as text, and
//! every write must be visible to subsequent reads within the same session
//! and across a plugin reload.

use crate::domain::error::Result;

/// Abstraction over session-scoped key-value persistence.
///
/// # Implementations
///
/// - [`JsonSessionStore`](crate::session::JsonSessionStore): JSON file under
///   the plugin's `/tmp` mount with atomic writes (default)
pub trait SessionStore {
    /// Reads the raw string stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written in this
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes the raw string `value` under `key`.
    ///
    /// The write is durable immediately: a subsequent [`read`](Self::read)
    /// observes it, even after a plugin reload within the same session.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}
