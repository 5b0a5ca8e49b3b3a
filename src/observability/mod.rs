//! File-based tracing for the plugin.
//!
//! This module wires the `tracing` macros used throughout the crate to a
//! rotating log file under the plugin's `/data` mount. Stdout is the render
//! surface, so it must stay clean; the log file is the only diagnostic
//! output channel.
//!
//! # Configuration
//!
//! The trace level is controlled via the `trace_level` option in the plugin
//! configuration (default: `"info"`); it accepts full `EnvFilter` directive
//! syntax, e.g. `"zortal=debug"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
