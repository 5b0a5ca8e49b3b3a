//! Query client for the remote character catalog.
//!
//! This module owns everything between the controllers and the Zellij host's
//! HTTP machinery: the GraphQL documents and their variables, wire-format
//! decoding into domain types, and the in-flight bookkeeping that discards
//! stale responses.
//!
//! # Architecture
//!
//! Queries are issued through `zellij_tile`'s `web_request`; results come
//! back asynchronously as `WebRequestResult` events. Each issued request
//! carries a `(kind, token)` pair in its context map. [`QueryClient`] keeps
//! the token of the most recently issued request per kind and drops any
//! resolution stamped with an older token: the criteria that produced a
//! superseded request are no longer current, so its response must never
//! touch view state.
//!
//! - `request`: Query documents, variables, and the effective-filter rule
//! - `response`: Wire DTOs and decoding into domain types
//! - `client`: Request issuing, token tracking, stale suppression

pub mod client;
pub mod request;
pub mod response;

pub use client::{QueryClient, Resolved};
pub use request::{effective_filter, DetailVariables, ListVariables, MIN_FILTER_LEN};
pub use response::QueryResolution;
