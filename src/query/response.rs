//! Wire-format decoding for query responses.
//!
//! This module defines the raw response DTOs as the remote API sends them
//! and converts them into domain types. The DTOs are separate from the
//! domain models on purpose: the wire side is full of nullable fields and
//! renamed keys that nothing above the query layer should have to know
//! about.

use crate::domain::{
    CharacterDetail, CharacterSummary, EpisodeRef, PageResult, PlaceRef, Status,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The resolved half of a query's tri-state result.
///
/// A query that has finished loading is described by `(error, data)`; the
/// shared classification logic turns this, together with the loading flag,
/// into a view state. Both fields absent means the remote side succeeded at
/// the transport level but produced no payload, which classifies as failed,
/// exactly like an explicit error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResolution<T> {
    /// Transport or API error message, if any. Only ever logged; the UI
    /// shows one generic failure alert regardless of the message.
    pub error: Option<String>,
    /// Decoded payload, if any.
    pub data: Option<T>,
}

impl<T> QueryResolution<T> {
    /// A resolution carrying an error and no data.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            data: None,
        }
    }

    /// A successful resolution carrying an optional payload.
    #[must_use]
    pub const fn of(data: Option<T>) -> Self {
        Self { error: None, data }
    }
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Vec<WireError>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ListData {
    characters: Option<ListPayload>,
}

#[derive(Debug, Deserialize)]
struct ListPayload {
    info: WirePageInfo,
    #[serde(default)]
    results: Vec<WireSummary>,
}

#[derive(Debug, Deserialize)]
struct WirePageInfo {
    count: Option<u32>,
    pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct WireSummary {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    species: String,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailData {
    character: Option<WireCharacter>,
}

#[derive(Debug, Deserialize)]
struct WireCharacter {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    species: String,
    status: Option<String>,
    created: Option<String>,
    origin: Option<WirePlace>,
    location: Option<WirePlace>,
    #[serde(default)]
    episode: Vec<WireEpisode>,
}

#[derive(Debug, Deserialize)]
struct WirePlace {
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    dimension: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireEpisode {
    #[serde(default)]
    episode: String,
    #[serde(default)]
    name: String,
}

/// Decodes a list query response body.
///
/// Undecodable bodies and responses carrying GraphQL errors resolve to the
/// error half; a well-formed response with a null `characters` payload
/// resolves to absent data. Zero results are *not* an error here; the
/// classification layer decides that they render as the empty state.
pub fn decode_list(body: &[u8]) -> QueryResolution<PageResult> {
    let envelope: Envelope<ListData> = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(e) => return QueryResolution::failed(format!("undecodable list response: {e}")),
    };

    if let Some(first) = envelope.errors.first() {
        return QueryResolution::failed(format!("remote error: {}", first.message));
    }

    QueryResolution::of(
        envelope
            .data
            .and_then(|d| d.characters)
            .map(into_page_result),
    )
}

/// Decodes a detail query response body.
///
/// A null `character` payload (the remote side's only way of saying "no
/// such id") resolves to absent data, which the classification layer
/// reports as failed; the detail view has no empty state.
pub fn decode_detail(body: &[u8]) -> QueryResolution<CharacterDetail> {
    let envelope: Envelope<DetailData> = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(e) => return QueryResolution::failed(format!("undecodable detail response: {e}")),
    };

    if let Some(first) = envelope.errors.first() {
        return QueryResolution::failed(format!("remote error: {}", first.message));
    }

    QueryResolution::of(envelope.data.and_then(|d| d.character).map(into_detail))
}

fn into_page_result(payload: ListPayload) -> PageResult {
    PageResult {
        total_count: payload.info.count.unwrap_or(0),
        total_pages: payload.info.pages.unwrap_or(0),
        items: payload.results.into_iter().map(into_summary).collect(),
    }
}

fn into_summary(row: WireSummary) -> CharacterSummary {
    CharacterSummary {
        id: row.id,
        name: row.name,
        image_url: row.image,
        species: row.species,
        status: Status::from_wire(row.status.as_deref()),
    }
}

fn into_detail(character: WireCharacter) -> CharacterDetail {
    CharacterDetail {
        id: character.id,
        name: character.name,
        gender: character.gender,
        image_url: character.image,
        species: character.species,
        status: Status::from_wire(character.status.as_deref()),
        created_at: character.created.as_deref().and_then(parse_created),
        origin: character.origin.map_or_else(unknown_place, into_place),
        location: character.location.map_or_else(unknown_place, into_place),
        episodes: character
            .episode
            .into_iter()
            .map(|e| EpisodeRef {
                code: e.episode,
                name: e.name,
            })
            .collect(),
    }
}

fn into_place(place: WirePlace) -> PlaceRef {
    PlaceRef {
        name: place.name.unwrap_or_else(|| "unknown".to_string()),
        kind: place.kind.unwrap_or_default(),
        dimension: place.dimension.unwrap_or_default(),
    }
}

fn unknown_place() -> PlaceRef {
    PlaceRef {
        name: "unknown".to_string(),
        kind: String::new(),
        dimension: String::new(),
    }
}

fn parse_created(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_list_page() {
        let body = serde_json::json!({
            "data": {
                "characters": {
                    "info": {"count": 50, "pages": 5},
                    "results": [
                        {"id": "1", "name": "Rick Sanchez", "image": "https://example.test/1.jpeg",
                         "species": "Human", "status": "Alive"},
                        {"id": "2", "name": "Morty Smith", "image": "https://example.test/2.jpeg",
                         "species": "Human"}
                    ]
                }
            }
        });

        let resolution = decode_list(body.to_string().as_bytes());
        assert!(resolution.error.is_none());

        let page = resolution.data.unwrap();
        assert_eq!(page.total_count, 50);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].status, Status::Alive);
        // Absent status normalizes, it does not fail decoding.
        assert_eq!(page.items[1].status, Status::Unknown);
    }

    #[test]
    fn zero_results_decode_as_data_not_error() {
        let body = serde_json::json!({
            "data": {
                "characters": {"info": {"count": 0, "pages": 0}, "results": []}
            }
        });

        let resolution = decode_list(body.to_string().as_bytes());
        assert!(resolution.error.is_none());
        assert!(resolution.data.unwrap().items.is_empty());
    }

    #[test]
    fn graphql_errors_resolve_to_the_error_half() {
        let body = serde_json::json!({
            "data": null,
            "errors": [{"message": "something exploded"}]
        });

        let resolution = decode_list(body.to_string().as_bytes());
        assert!(resolution.error.is_some());
        assert!(resolution.data.is_none());
    }

    #[test]
    fn garbage_bodies_resolve_to_the_error_half() {
        let resolution = decode_list(b"<html>502 Bad Gateway</html>");
        assert!(resolution.error.is_some());
        assert!(resolution.data.is_none());
    }

    #[test]
    fn missing_character_decodes_as_absent_data_without_error() {
        let body = serde_json::json!({"data": {"character": null}});

        let resolution = decode_detail(body.to_string().as_bytes());
        assert!(resolution.error.is_none());
        assert!(resolution.data.is_none());
    }

    #[test]
    fn decodes_a_full_detail_record() {
        let body = serde_json::json!({
            "data": {
                "character": {
                    "id": "1",
                    "name": "Rick Sanchez",
                    "gender": "Male",
                    "image": "https://example.test/1.jpeg",
                    "species": "Human",
                    "status": "Alive",
                    "created": "2017-11-04T18:48:46.250Z",
                    "origin": {"name": "Earth (C-137)", "type": "Planet", "dimension": "Dimension C-137"},
                    "location": {"name": "Citadel of Ricks", "type": "Space station", "dimension": "unknown"},
                    "episode": [
                        {"episode": "S01E01", "name": "Pilot"},
                        {"episode": "S01E02", "name": "Lawnmower Dog"}
                    ]
                }
            }
        });

        let detail = decode_detail(body.to_string().as_bytes()).data.unwrap();
        assert_eq!(detail.name, "Rick Sanchez");
        assert_eq!(detail.status, Status::Alive);
        assert_eq!(detail.origin.kind, "Planet");
        assert_eq!(detail.episodes.len(), 2);
        assert_eq!(detail.episodes[0].code, "S01E01");
        assert!(detail.created_at.is_some());
    }

    #[test]
    fn unparsable_created_normalizes_to_none() {
        let body = serde_json::json!({
            "data": {
                "character": {
                    "id": "1", "name": "Rick", "gender": "Male", "image": "",
                    "species": "Human", "created": "yesterday-ish",
                    "origin": null, "location": null, "episode": []
                }
            }
        });

        let detail = decode_detail(body.to_string().as_bytes()).data.unwrap();
        assert!(detail.created_at.is_none());
        assert_eq!(detail.origin.name, "unknown");
        assert_eq!(detail.status, Status::Unknown);
    }
}
