//! Search criteria for the paginated character listing.
//!
//! [`SearchCriteria`] is the single input the list query derives from: the
//! current page number and the raw search text. It is restored from the
//! session store on load, mutated by user search/pagination events, and
//! persisted back on every mutation.

use serde::{Deserialize, Serialize};

/// Current page and search text of the list view.
///
/// `page` is always at least 1. `search_text` is kept verbatim as typed;
/// whether it actually reaches the remote query as a name filter is decided
/// by the query layer (inputs shorter than two characters are treated as
/// "no filter" to avoid near-empty result thrash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// 1-based page number.
    pub page: u32,
    /// Raw search text as typed by the user.
    pub search_text: String,
}

impl SearchCriteria {
    /// Creates criteria from restored session values.
    ///
    /// Pages below 1 are lifted to 1 so the invariant holds even for
    /// hand-edited session files.
    #[must_use]
    pub fn new(page: u32, search_text: String) -> Self {
        Self {
            page: page.max(1),
            search_text,
        }
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            page: 1,
            search_text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_never_below_one() {
        assert_eq!(SearchCriteria::new(0, String::new()).page, 1);
        assert_eq!(SearchCriteria::new(3, String::new()).page, 3);
    }
}
