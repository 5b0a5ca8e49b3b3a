//! Query documents and variable construction.
//!
//! The two GraphQL documents the plugin issues, the typed variables they
//! take, and the rule deciding when search text becomes a remote name
//! filter. Variables derive `PartialEq` deliberately: the list controller
//! re-issues its query only when the derived variables change by value,
//! which is also what makes repeated no-op pagination events free.

use crate::domain::SearchCriteria;
use serde::Serialize;

/// Paginated list query.
pub const LIST_QUERY: &str = "\
query Characters($page: Int, $filter: FilterCharacter) {
  characters(page: $page, filter: $filter) {
    info { count pages }
    results { id name image species status }
  }
}";

/// Single-character detail query.
pub const DETAIL_QUERY: &str = "\
query Character($characterId: ID!) {
  character(id: $characterId) {
    id name gender image species status created
    origin { name type dimension }
    location { name type dimension }
    episode { episode name }
  }
}";

/// Minimum search-text length that is forwarded as a name filter.
///
/// Shorter inputs match nearly everything or nearly nothing and thrash the
/// result set on every keystroke, so they are treated as "no filter".
pub const MIN_FILTER_LEN: usize = 2;

/// Returns the name filter actually sent to the remote query.
///
/// # Examples
///
/// ```
/// use zortal::query::effective_filter;
///
/// assert_eq!(effective_filter(""), None);
/// assert_eq!(effective_filter("R"), None);
/// assert_eq!(effective_filter("Ri"), Some("Ri"));
/// ```
#[must_use]
pub fn effective_filter(text: &str) -> Option<&str> {
    if text.chars().count() < MIN_FILTER_LEN {
        None
    } else {
        Some(text)
    }
}

/// Name filter object of the list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameFilter {
    pub name: String,
}

/// Variables of the paginated list query.
///
/// Serializes as `{"page": <n>, "filter": {"name": <text>} | null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListVariables {
    pub page: u32,
    pub filter: Option<NameFilter>,
}

impl ListVariables {
    /// Derives query variables from the current search criteria, applying
    /// the effective-filter rule.
    #[must_use]
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        Self {
            page: criteria.page,
            filter: effective_filter(&criteria.search_text).map(|name| NameFilter {
                name: name.to_string(),
            }),
        }
    }
}

/// Variables of the detail query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailVariables {
    #[serde(rename = "characterId")]
    pub character_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_inputs_are_not_forwarded_as_filters() {
        assert_eq!(effective_filter(""), None);
        assert_eq!(effective_filter("R"), None);
        assert_eq!(effective_filter("ü"), None);
    }

    #[test]
    fn two_or_more_characters_are_forwarded_verbatim() {
        assert_eq!(effective_filter("Ri"), Some("Ri"));
        assert_eq!(effective_filter("Rick Sanchez"), Some("Rick Sanchez"));
        assert_eq!(effective_filter("üü"), Some("üü"));
    }

    #[test]
    fn list_variables_serialize_null_filter() {
        let criteria = SearchCriteria::new(3, "R".to_string());
        let vars = ListVariables::from_criteria(&criteria);
        let json = serde_json::to_value(&vars).unwrap();

        assert_eq!(json, serde_json::json!({"page": 3, "filter": null}));
    }

    #[test]
    fn list_variables_serialize_name_filter() {
        let criteria = SearchCriteria::new(1, "Ri".to_string());
        let vars = ListVariables::from_criteria(&criteria);
        let json = serde_json::to_value(&vars).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"page": 1, "filter": {"name": "Ri"}})
        );
    }

    #[test]
    fn variables_change_by_value_when_filter_crosses_threshold() {
        let one_char = ListVariables::from_criteria(&SearchCriteria::new(1, "R".to_string()));
        let no_text = ListVariables::from_criteria(&SearchCriteria::new(1, String::new()));
        let two_chars = ListVariables::from_criteria(&SearchCriteria::new(1, "Ri".to_string()));

        // Below the threshold the derived variables are identical, so no
        // re-fetch happens; crossing it changes them.
        assert_eq!(one_char, no_text);
        assert_ne!(two_chars, no_text);
    }

    #[test]
    fn detail_variables_use_the_wire_field_name() {
        let vars = DetailVariables {
            character_id: "42".to_string(),
        };
        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(json, serde_json::json!({"characterId": "42"}));
    }
}
