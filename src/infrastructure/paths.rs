//! Filesystem locations inside the Zellij plugin sandbox.
//!
//! Zellij mounts a private filesystem for each plugin. The two mounts the
//! plugin relies on have different lifetimes, and the distinction is load
//! bearing:
//!
//! - `/data` survives across Zellij sessions; the log file lives there.
//! - `/tmp` is cleared when the Zellij session ends but survives plugin
//!   reloads within it: exactly the lifetime of session-scoped browsing
//!   state, so the session store lives there.

use std::path::PathBuf;

/// Returns the plugin's persistent data directory.
///
/// Used for the rotating log file. Contents outlive the Zellij session.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/data")
}

/// Returns the path of the session state file.
///
/// Lives under `/tmp`, which Zellij clears when the session ends, so page
/// and search text persist across plugin reloads within one session and
/// start fresh in the next.
#[must_use]
pub fn session_state_path() -> PathBuf {
    PathBuf::from("/tmp").join("session.json")
}
