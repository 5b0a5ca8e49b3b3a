//! Input mode and route state types for the application.
//!
//! This module defines the state machine enums that control user
//! interaction: which view is showing, and how keyboard input is
//! interpreted while the list is on screen.

/// Focus state within search mode.
///
/// Determines whether search input is being typed or the filtered results
/// are being navigated. Controls which keybindings are active during
/// search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to
    /// Navigating).
    Typing,

    /// User is navigating the result rows while the filter stays active.
    ///
    /// Accepts j/k for movement, enter to open a detail view, and / to
    /// return to Typing.
    Navigating,
}

/// Current input handling mode of the list view.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and whether the search box renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// The current view, standing in for a browser route.
///
/// `List` is the root; `Detail` is reached by selecting a list row. The
/// navigation history lives in the application state and `go back` /
/// `go home` operate on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Paginated, searchable character listing.
    List,

    /// Single-character detail view.
    Detail {
        /// Remote identifier of the character being shown.
        id: String,
    },
}
