//! Query issuing, in-flight tracking, and stale-response suppression.
//!
//! The Zellij host performs HTTP exchanges asynchronously: the plugin fires
//! a `web_request` and at some later event-loop turn receives a
//! `WebRequestResult` carrying the context map it attached when issuing.
//! [`QueryClient`] stamps every request with a `(kind, token)` pair in that
//! context and remembers only the most recently issued token per kind.
//!
//! Ordering guarantee: only the most recently issued query's result may
//! update view state. Criteria mutations always issue their replacement
//! query in the same event turn, so a response stamped with an older token
//! is by definition keyed to criteria that are no longer current; it is
//! discarded in [`QueryClient::resolve`] before anything above this layer
//! sees it. This suppression stands in for explicit cancellation, which the
//! host does not offer.

use crate::domain::error::{Result, ZortalError};
use crate::query::request::{self, DetailVariables, ListVariables};
use crate::query::response::{self, QueryResolution};
use crate::domain::{CharacterDetail, PageResult};
use std::collections::BTreeMap;
use zellij_tile::prelude::HttpVerb;
use zellij_tile::shim::web_request;

/// Context key carrying the query kind.
const CTX_KIND: &str = "zortal_query";
/// Context key carrying the request token.
const CTX_TOKEN: &str = "zortal_token";

/// Which of the two catalog queries a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    List,
    Detail,
}

impl QueryKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::List => "characters",
            Self::Detail => "character",
        }
    }

    fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "characters" => Some(Self::List),
            "character" => Some(Self::Detail),
            _ => None,
        }
    }
}

/// A resolution that survived stale-response suppression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The list query finished.
    List(QueryResolution<PageResult>),
    /// The detail query finished.
    Detail(QueryResolution<CharacterDetail>),
}

/// Issues catalog queries and resolves their responses.
///
/// One instance lives in the plugin shim for the lifetime of the pane. The
/// client is deliberately stateless beyond the in-flight tokens; result
/// caching belongs to the remote side and to the view state that owns each
/// resolved page.
pub struct QueryClient {
    /// GraphQL endpoint URL.
    api_url: String,
    /// Source of fresh request tokens.
    next_token: u64,
    /// Token of the most recently issued list request, if unresolved.
    list_in_flight: Option<u64>,
    /// Token of the most recently issued detail request, if unresolved.
    detail_in_flight: Option<u64>,
}

impl QueryClient {
    /// Creates a client for the given endpoint.
    #[must_use]
    pub const fn new(api_url: String) -> Self {
        Self {
            api_url,
            next_token: 0,
            list_in_flight: None,
            detail_in_flight: None,
        }
    }

    /// Issues the paginated list query.
    ///
    /// Any still-pending list request is superseded: its token stops being
    /// current, so its eventual response will be discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request body cannot be serialized. Nothing is
    /// issued and no in-flight state changes in that case.
    pub fn fetch_list(&mut self, variables: &ListVariables) -> Result<()> {
        let body = encode_body(request::LIST_QUERY, variables)?;
        let context = self.begin(QueryKind::List);

        tracing::debug!(page = variables.page, has_filter = variables.filter.is_some(), "issuing list query");
        self.issue(body, context);
        Ok(())
    }

    /// Issues the single-character detail query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request body cannot be serialized.
    pub fn fetch_detail(&mut self, character_id: &str) -> Result<()> {
        let variables = DetailVariables {
            character_id: character_id.to_string(),
        };
        let body = encode_body(request::DETAIL_QUERY, &variables)?;
        let context = self.begin(QueryKind::Detail);

        tracing::debug!(character_id = %character_id, "issuing detail query");
        self.issue(body, context);
        Ok(())
    }

    /// Resolves a `WebRequestResult` into a classified outcome.
    ///
    /// Returns `None` for responses that are not ours (foreign context),
    /// and for stale responses whose token has been superseded by a newer
    /// request of the same kind. A non-2xx HTTP status, including the
    /// host's synthetic `0` for transport failures, resolves to the error
    /// half without looking at the body.
    pub fn resolve(
        &mut self,
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Resolved> {
        let kind = QueryKind::from_str(context.get(CTX_KIND)?)?;
        let token: u64 = context.get(CTX_TOKEN)?.parse().ok()?;

        let current = match kind {
            QueryKind::List => &mut self.list_in_flight,
            QueryKind::Detail => &mut self.detail_in_flight,
        };

        if *current != Some(token) {
            tracing::debug!(
                kind = kind.as_str(),
                token = token,
                current = ?current,
                "discarding stale query response"
            );
            return None;
        }
        *current = None;

        if !(200..300).contains(&status) {
            tracing::debug!(kind = kind.as_str(), status = status, "query transport failed");
            return Some(match kind {
                QueryKind::List => {
                    Resolved::List(QueryResolution::failed(format!("HTTP status {status}")))
                }
                QueryKind::Detail => {
                    Resolved::Detail(QueryResolution::failed(format!("HTTP status {status}")))
                }
            });
        }

        Some(match kind {
            QueryKind::List => Resolved::List(response::decode_list(body)),
            QueryKind::Detail => Resolved::Detail(response::decode_detail(body)),
        })
    }

    /// Registers a fresh in-flight request of `kind` and returns the
    /// context map to attach to it.
    pub(crate) fn begin(&mut self, kind: QueryKind) -> BTreeMap<String, String> {
        self.next_token += 1;
        let token = self.next_token;

        match kind {
            QueryKind::List => self.list_in_flight = Some(token),
            QueryKind::Detail => self.detail_in_flight = Some(token),
        }

        let mut context = BTreeMap::new();
        context.insert(CTX_KIND.to_string(), kind.as_str().to_string());
        context.insert(CTX_TOKEN.to_string(), token.to_string());
        context
    }

    /// Hands the request to the host.
    fn issue(&self, body: Vec<u8>, context: BTreeMap<String, String>) {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        web_request(&self.api_url, HttpVerb::Post, headers, body, context);
    }
}

/// Serializes a GraphQL request body.
fn encode_body<V: serde::Serialize>(document: &str, variables: &V) -> Result<Vec<u8>> {
    serde_json::to_vec(&serde_json::json!({
        "query": document,
        "variables": variables,
    }))
    .map_err(|e| ZortalError::Query(format!("failed to serialize query body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> QueryClient {
        QueryClient::new("https://example.test/graphql".to_string())
    }

    fn list_body(count: usize) -> Vec<u8> {
        let results: Vec<_> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "id": i.to_string(), "name": format!("c{i}"),
                    "image": "", "species": "Human", "status": "Alive"
                })
            })
            .collect();
        serde_json::json!({
            "data": {"characters": {"info": {"count": count, "pages": 1}, "results": results}}
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn resolves_the_current_token() {
        let mut client = client();
        let context = client.begin(QueryKind::List);

        let resolved = client.resolve(200, &list_body(2), &context);
        match resolved {
            Some(Resolved::List(resolution)) => {
                assert_eq!(resolution.data.unwrap().items.len(), 2);
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn superseded_tokens_are_discarded() {
        let mut client = client();
        let stale_context = client.begin(QueryKind::List);
        let fresh_context = client.begin(QueryKind::List);

        // The response for the first request arrives after a second request
        // was issued: it must not surface.
        assert_eq!(client.resolve(200, &list_body(2), &stale_context), None);

        // The current request still resolves normally.
        assert!(client.resolve(200, &list_body(1), &fresh_context).is_some());
    }

    #[test]
    fn resolving_twice_yields_nothing_the_second_time() {
        let mut client = client();
        let context = client.begin(QueryKind::List);

        assert!(client.resolve(200, &list_body(1), &context).is_some());
        assert_eq!(client.resolve(200, &list_body(1), &context), None);
    }

    #[test]
    fn list_and_detail_tokens_are_independent() {
        let mut client = client();
        let list_context = client.begin(QueryKind::List);
        let _detail_context = client.begin(QueryKind::Detail);

        // Issuing a detail query does not supersede the pending list query.
        assert!(client.resolve(200, &list_body(1), &list_context).is_some());
    }

    #[test]
    fn foreign_contexts_are_ignored() {
        let mut client = client();
        let _context = client.begin(QueryKind::List);

        let foreign = BTreeMap::from([("other_plugin".to_string(), "x".to_string())]);
        assert_eq!(client.resolve(200, &list_body(1), &foreign), None);
    }

    #[test]
    fn transport_failures_resolve_to_the_error_half() {
        let mut client = client();
        let context = client.begin(QueryKind::Detail);

        match client.resolve(502, b"", &context) {
            Some(Resolved::Detail(resolution)) => {
                assert!(resolution.error.is_some());
                assert!(resolution.data.is_none());
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }
}
