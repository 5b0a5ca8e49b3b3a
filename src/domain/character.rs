//! Character catalog domain models.
//!
//! This module defines the core types describing catalog entries as the rest
//! of the plugin consumes them: the lightweight [`CharacterSummary`] rows of
//! a paginated [`PageResult`], the fully expanded [`CharacterDetail`], and
//! the normalized [`Status`] enum. Wire-level concerns (field renames,
//! nullable values) live in the query layer; by the time values reach this
//! module they are already well-formed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Life status of a character, normalized from the wire representation.
///
/// The remote API reports status as a free-form string that is absent for
/// some records. Normalization is centralized here so every surface (list
/// rows, detail badge) agrees on the mapping: `"Alive"` and `"Dead"` map to
/// their variants; anything else, including an absent value, collapses to
/// [`Status::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Alive,
    Dead,
    Unknown,
}

impl Status {
    /// Normalizes a raw wire status into a [`Status`].
    ///
    /// # Examples
    ///
    /// ```
    /// use zortal::domain::Status;
    ///
    /// assert_eq!(Status::from_wire(Some("Alive")), Status::Alive);
    /// assert_eq!(Status::from_wire(Some("Dead")), Status::Dead);
    /// assert_eq!(Status::from_wire(Some("unknown")), Status::Unknown);
    /// assert_eq!(Status::from_wire(None), Status::Unknown);
    /// ```
    #[must_use]
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("Alive") => Self::Alive,
            Some("Dead") => Self::Dead,
            _ => Self::Unknown,
        }
    }

    /// Returns the uppercase badge label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alive => "ALIVE",
            Self::Dead => "DEAD",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// One row of a paginated character listing.
///
/// Owned transiently by the list view state for the duration of one query
/// resolution and superseded wholesale by the next result; there is no
/// incremental merge across pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    /// Remote identifier, used to issue the detail query.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Portrait image URL.
    pub image_url: String,
    /// Species label (e.g. "Human").
    pub species: String,
    /// Normalized life status.
    pub status: Status,
}

/// One resolved page of the character listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// Total number of characters matching the current filter.
    pub total_count: u32,
    /// Total number of pages for the current filter.
    pub total_pages: u32,
    /// Rows of this page, in remote order.
    pub items: Vec<CharacterSummary>,
}

/// A place reference attached to a character (origin or last known location).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRef {
    pub name: String,
    /// Place category (e.g. "Planet"). Called `type` on the wire.
    pub kind: String,
    pub dimension: String,
}

impl PlaceRef {
    /// Formats the place for display as `name (dimension)`, omitting the
    /// dimension when it matches the unknown placeholder.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.dimension.is_empty() || self.dimension == "unknown" {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.dimension)
        }
    }
}

/// A reference to an episode a character appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRef {
    /// Episode code (e.g. "S01E01").
    pub code: String,
    /// Episode title.
    pub name: String,
}

/// The fully expanded record behind the detail view.
///
/// Re-created whenever the detail route identifier changes; never cached
/// across navigations beyond what the remote side provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetail {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub image_url: String,
    pub species: String,
    pub status: Status,
    /// When the record was created upstream. `None` when the wire value is
    /// absent or unparsable.
    pub created_at: Option<DateTime<Utc>>,
    pub origin: PlaceRef,
    pub location: PlaceRef,
    /// Episodes the character appears in, in remote order.
    pub episodes: Vec<EpisodeRef>,
}

impl CharacterDetail {
    /// Returns the creation date formatted for display, or `"unknown"` when
    /// the record carries none.
    #[must_use]
    pub fn created_label(&self) -> String {
        self.created_at
            .map_or_else(|| "unknown".to_string(), |t| t.format("%b %e, %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_normalizes_known_values() {
        assert_eq!(Status::from_wire(Some("Alive")), Status::Alive);
        assert_eq!(Status::from_wire(Some("Dead")), Status::Dead);
    }

    #[test]
    fn status_collapses_everything_else_to_unknown() {
        assert_eq!(Status::from_wire(Some("unknown")), Status::Unknown);
        assert_eq!(Status::from_wire(Some("xyz")), Status::Unknown);
        assert_eq!(Status::from_wire(Some("")), Status::Unknown);
        assert_eq!(Status::from_wire(None), Status::Unknown);
    }

    #[test]
    fn status_matching_is_case_sensitive() {
        assert_eq!(Status::from_wire(Some("alive")), Status::Unknown);
        assert_eq!(Status::from_wire(Some("DEAD")), Status::Unknown);
    }

    #[test]
    fn place_description_includes_dimension_when_known() {
        let place = PlaceRef {
            name: "Earth".to_string(),
            kind: "Planet".to_string(),
            dimension: "C-137".to_string(),
        };
        assert_eq!(place.describe(), "Earth (C-137)");
    }

    #[test]
    fn place_description_omits_unknown_dimension() {
        let place = PlaceRef {
            name: "Citadel of Ricks".to_string(),
            kind: "Space station".to_string(),
            dimension: "unknown".to_string(),
        };
        assert_eq!(place.describe(), "Citadel of Ricks");
    }

    #[test]
    fn created_label_handles_missing_timestamp() {
        let detail = CharacterDetail {
            id: "1".to_string(),
            name: "Rick Sanchez".to_string(),
            gender: "Male".to_string(),
            image_url: String::new(),
            species: "Human".to_string(),
            status: Status::Alive,
            created_at: None,
            origin: PlaceRef {
                name: "Earth".to_string(),
                kind: "Planet".to_string(),
                dimension: "C-137".to_string(),
            },
            location: PlaceRef {
                name: "Earth".to_string(),
                kind: "Planet".to_string(),
                dimension: "Replacement Dimension".to_string(),
            },
            episodes: vec![],
        };
        assert_eq!(detail.created_label(), "unknown");
    }
}
