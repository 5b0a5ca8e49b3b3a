//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between
//! the plugin shim (main.rs) and the domain/query/session layers. It
//! implements the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Query Resolutions ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and both view controllers
//! - [`modes`]: Input mode and route state machine types
//! - [`state`]: Central application state container and view model computation
//! - [`viewstate`]: Query outcome classification shared by both controllers

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod viewstate;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Route, SearchFocus};
pub use state::AppState;
pub use viewstate::{classify, ViewState};
