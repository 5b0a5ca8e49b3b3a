//! Infrastructure layer for plugin sandbox interactions.
//!
//! This module provides utilities for working with the Zellij plugin
//! sandbox environment, particularly the mount points with their differing
//! lifetimes.

pub mod paths;

pub use paths::{data_dir, session_state_path};
