//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! query resolutions. Actions bridge pure state transformations and
//! effectful operations: issuing remote queries, persisting session state,
//! closing the pane.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin shim
//! executes them in sequence, which is what makes a persist emitted
//! alongside a state mutation "synchronous" from the user's point of view:
//! both happen within the same event turn, before anything can render or
//! resolve.

use crate::query::ListVariables;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues the paginated list query with the given variables.
    ///
    /// The variables are a snapshot taken at emission time; the query
    /// client stamps the request so a later criteria change supersedes it.
    FetchList(ListVariables),

    /// Issues the single-character detail query.
    FetchDetail {
        /// Remote identifier from the detail route.
        character_id: String,
    },

    /// Persists the current page number to the session store.
    PersistPage(u32),

    /// Persists the current search text to the session store.
    PersistSearchText(String),
}
