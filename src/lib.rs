//! Zortal: A Zellij plugin for browsing the Rick & Morty character catalog.
//!
//! Zortal is a terminal multiplexer plugin that provides:
//! - A paginated character listing backed by the public GraphQL API
//! - Server-side name search with noise suppression for 1-character input
//! - A per-character detail view with status badge and episode list
//! - Page and search text persisted for the lifetime of the Zellij session
//! - Stale-response suppression so fast navigation never shows old results
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling (list + detail controllers)       │  ← Business logic
//! │  - View-state classification                        │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Session Layer │   │ Query Layer   │
//! │ (ui/)         │   │ (session/)    │   │ (query/)      │
//! │ - Rendering   │   │ - JSON K/V    │   │ - GraphQL     │
//! │ - Theming     │   │ - Typed keys  │   │ - Stale drop  │
//! │ - Components  │   │ - Atomic I/O  │   │ - Wire decode │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Catalog models (domain/character)                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber                               │
//! │  - Rotating log file under /data                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (characters, criteria, errors)
//! - [`infrastructure`]: Plugin sandbox utilities (paths)
//! - [`query`]: GraphQL query client with stale-response suppression
//! - [`session`]: Session-scoped key-value persistence
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: File-based tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zortal.wasm" {
//!         api_url "https://rickandmortyapi.com/graphql"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Restore page and search text from the session store
//!    - Create `AppState` with theme and restored criteria
//!    - Request web access permission and subscribe to events
//! 2. **Activation** (permission granted):
//!    - Issue the list query for the restored criteria
//! 3. **Event Loop**:
//!    - Key events mutate state, persist criteria, and issue queries
//!    - `WebRequestResult` events resolve queries, after stale filtering,
//!      into classified view states
//! 4. **Rendering**:
//!    - Compute a view model for the current route
//!    - Render components (header, search, table, pagination, detail)
//!
//! # Key Design Decisions
//!
//! ## Variables-Keyed Re-Fetch
//!
//! The list query is re-issued only when its derived variables (page +
//! effective name filter) change by value. Repeated no-op events cost
//! nothing, and a search-text change below the filter threshold does not
//! hit the network.
//!
//! ## Stale-Response Suppression
//!
//! Criteria changes are synchronous but remote resolution is not. Every
//! request carries a token; only the most recently issued token per query
//! kind may update view state, so a slow response for superseded criteria
//! is discarded instead of clobbering fresh results.
//!
//! ## Session-Scoped Persistence
//!
//! Page and search text live in a JSON file under `/tmp`, which Zellij
//! clears when the session ends: reload the plugin and the view comes back
//! where it was; start a new session and browsing starts fresh.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod query;
pub mod session;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Route, SearchFocus, ViewState};
pub use domain::{Result, SearchCriteria, Status, ZortalError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default GraphQL endpoint of the public character catalog.
pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/graphql";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zortal.wasm" {
///     api_url "https://rickandmortyapi.com/graphql"
///     theme "catppuccin-frappe"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL endpoint to query.
    ///
    /// Default: the public catalog endpoint. Overridable mainly for
    /// self-hosted mirrors.
    pub api_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for the log file.
    ///
    /// Accepts `EnvFilter` directives (e.g. `info`, `zortal=debug`).
    /// Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts typed values with
    /// fallback defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zortal::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.api_url, zortal::DEFAULT_API_URL);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_url = config
            .get("api_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the application state with configuration and restored
/// criteria.
///
/// Resolves the theme (custom file first, then built-in name, then the
/// default) and builds an `AppState` ready for event processing. The first
/// query is issued when the plugin is activated, not here.
///
/// # Example
///
/// ```rust
/// use zortal::{initialize, Config, SearchCriteria};
///
/// let state = initialize(&Config::default(), SearchCriteria::default());
/// assert_eq!(state.criteria.page, 1);
/// ```
#[must_use]
pub fn initialize(config: &Config, criteria: SearchCriteria) -> AppState {
    tracing::debug!("initializing zortal plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(criteria, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_the_public_endpoint() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.api_url, DEFAULT_API_URL);

        let mut map = BTreeMap::new();
        map.insert("api_url".to_string(), "   ".to_string());
        assert_eq!(Config::from_zellij(&map).api_url, DEFAULT_API_URL);
    }

    #[test]
    fn initialize_restores_the_given_criteria() {
        let criteria = SearchCriteria::new(4, "Rick".to_string());
        let state = initialize(&Config::default(), criteria.clone());
        assert_eq!(state.criteria, criteria);
    }

    #[test]
    fn unknown_theme_names_fall_back_to_the_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config, SearchCriteria::default());
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
