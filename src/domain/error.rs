//! Error types for the Zortal plugin.
//!
//! This module defines the centralized error type [`ZortalError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for Zortal plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from session-store I/O to query construction and configuration
/// issues. Most variants wrap underlying errors from external crates using
/// `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum ZortalError {
    /// Session-store operation failed.
    ///
    /// Occurs when reading from or writing to the session state file fails.
    /// The string contains a description of what went wrong.
    #[error("Session store error: {0}")]
    Session(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse or apply the configured theme.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Query construction or decoding failed.
    ///
    /// Occurs when query variables cannot be serialized or a response body
    /// cannot be decoded. Remote failures are not errors in this sense; they
    /// classify into the `Failed` view state instead.
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zortal operations.
///
/// This is a type alias for `std::result::Result<T, ZortalError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZortalError>;
