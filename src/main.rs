//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zortal
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! The shim owns the pieces that talk to the outside world, the query
//! client (HTTP via the host) and the session store (plugin filesystem),
//! and keeps the library layer pure:
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │   Zellij Host                             │
//! │  ┌─────────────────────────────────────┐  │
//! │  │  State (plugin)                     │  │
//! │  │   app: AppState   ← library layer   │  │
//! │  │   client: QueryClient → web_request │  │
//! │  │   session: JsonSessionStore → /tmp  │  │
//! │  └─────────────────────────────────────┘  │
//! │        ▲ events            │ requests     │
//! │        └── WebRequestResult┘              │
//! └───────────────────────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, restore criteria from the
//!    session store, create `AppState`, request web permission, subscribe
//! 2. **Activation**: On granted permission, issue the initial list query
//! 3. **Update**: Translate Zellij events to library events, execute
//!    resulting actions (fetch / persist / close)
//! 4. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key(...)` → navigation/search/pagination events per route and mode
//! - `WebRequestResult` → stale-filtered query resolutions
//! - `PermissionRequestResult` → activation
//!
//! # Keybindings
//!
//! List view, normal mode:
//! - `j`/`k` or `Down`/`Up` (also `Ctrl+n`/`Ctrl+p`): move selection
//! - `Enter`: open detail view
//! - `/`: search
//! - `h`/`l` or `Left`/`Right`: previous/next page
//! - `g`/`G`: first/last page, `1`-`9`: jump to page
//! - `t`: cycle color scheme, `q`: close
//!
//! List view, search mode: type to filter, `Enter` to navigate results,
//! `Esc` to clear and leave search.
//!
//! Detail view:
//! - `Esc`/`Backspace`/`b`: back, `h`: home, `t`: cycle theme, `q`: close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zortal::infrastructure::paths;
use zortal::query::{QueryClient, Resolved};
use zortal::session::{JsonSessionStore, SessionKey, SessionValue, PAGE, SEARCH_TEXT};
use zortal::{handle_event, Action, Config, Event, InputMode, Route, SearchCriteria, SearchFocus};

// Register the plugin with Zellij
register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the host-facing collaborators: the
/// query client and the session store.
struct State {
    /// Core application state from the library layer.
    app: zortal::AppState,

    /// Query client issuing `web_request`s and filtering stale responses.
    client: QueryClient,

    /// Session store; `None` when the session file could not be opened
    /// (persistence is then skipped for the lifetime of the pane).
    session: Option<JsonSessionStore>,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: zortal::initialize(&config, SearchCriteria::default()),
            client: QueryClient::new(config.api_url),
            session: None,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing, restores persisted
    /// criteria, requests the web access permission, and subscribes to
    /// events. The initial query waits for the permission grant.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zortal::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(api_url = %config.api_url, "plugin loading started");

        let criteria = match JsonSessionStore::new(paths::session_state_path()) {
            Ok(store) => {
                let criteria =
                    SearchCriteria::new(PAGE.load(&store), SEARCH_TEXT.load(&store));
                self.session = Some(store);
                criteria
            }
            Err(e) => {
                tracing::warn!(error = %e, "session store unavailable, state will not persist");
                SearchCriteria::default()
            }
        };

        tracing::debug!(
            page = criteria.page,
            search_text = %criteria.search_text,
            "restored session criteria"
        );

        self.app = zortal::initialize(&config, criteria);
        self.client = QueryClient::new(config.api_url);

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if
    /// the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match self.client.resolve(status, &body, &context) {
                    Some(Resolved::List(resolution)) => Event::ListQueryResolved(resolution),
                    Some(Resolved::Detail(resolution)) => Event::DetailQueryResolved(resolution),
                    // Stale or foreign response; nothing to update.
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        zortal::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs a library event through the handler and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Handles permission request results.
    ///
    /// Web access is the one permission the plugin needs; the first query
    /// is issued the moment it is granted.
    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - issuing initial query");
                self.dispatch(&Event::Activated)
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - the catalog cannot be browsed");
                false
            }
        }
    }

    /// Maps keyboard events to application events, per route and mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::SelectionDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::SelectionUp);
        }

        match self.app.route {
            Route::Detail { .. } => Self::map_detail_key(key),
            Route::List => match self.app.input_mode {
                InputMode::Search(focus) => Self::map_search_key(key, focus),
                InputMode::Normal => Self::map_list_key(key),
            },
        }
    }

    /// Key mapping for the detail view.
    fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc | BareKey::Backspace | BareKey::Char('b') => Event::GoBack,
            BareKey::Char('h') => Event::GoHome,
            BareKey::Char('t') => Event::CycleTheme,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Key mapping for the list view in normal mode.
    fn map_list_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::SelectionDown,
            BareKey::Up | BareKey::Char('k') => Event::SelectionUp,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Left | BareKey::Char('h') => Event::PreviousPage,
            BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Char('g') => Event::FirstPage,
            BareKey::Char('G') => Event::LastPage,
            BareKey::Char('t') => Event::CycleTheme,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            BareKey::Char(c) if c.is_ascii_digit() && c != '0' => {
                Event::GoToPage(u32::from(c as u8 - b'0'))
            }
            _ => return None,
        })
    }

    /// Key mapping for the list view in search mode.
    fn map_search_key(key: &KeyWithModifier, focus: SearchFocus) -> Option<Event> {
        match focus {
            SearchFocus::Typing => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::FocusResults,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            SearchFocus::Navigating => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::OpenSelected,
                BareKey::Char('/') => Event::FocusSearchBar,
                BareKey::Down | BareKey::Char('j') => Event::SelectionDown,
                BareKey::Up | BareKey::Char('k') => Event::SelectionUp,
                BareKey::Left | BareKey::Char('h') => Event::PreviousPage,
                BareKey::Right | BareKey::Char('l') => Event::NextPage,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close the plugin pane
    /// - `FetchList` / `FetchDetail`: Issue the remote query
    /// - `PersistPage` / `PersistSearchText`: Write the session store
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchList(variables) => {
                if let Err(e) = self.client.fetch_list(variables) {
                    tracing::error!(error = %e, "failed to issue list query");
                }
            }
            Action::FetchDetail { character_id } => {
                if let Err(e) = self.client.fetch_detail(character_id) {
                    tracing::error!(error = %e, "failed to issue detail query");
                }
            }
            Action::PersistPage(page) => self.persist(&PAGE, page),
            Action::PersistSearchText(text) => self.persist(&SEARCH_TEXT, text),
        }
    }

    /// Writes one typed value to the session store, if it is available.
    fn persist<T: SessionValue>(&mut self, key: &SessionKey<T>, value: &T) {
        let Some(store) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = key.store(store, value) {
            tracing::error!(key = key.name, error = %e, "failed to persist session value");
        }
    }
}
