//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application
//! state, following the MVVM pattern. View models are optimized for
//! rendering and contain pre-computed display information: truncated
//! columns, the pagination item window, alert contents. They contain no
//! business logic.

use crate::domain::Status;

/// View model for whichever route is showing.
#[derive(Debug, Clone)]
pub enum UIViewModel {
    /// Paginated character listing.
    List(ListViewModel),
    /// Single-character detail view.
    Detail(DetailViewModel),
}

/// Complete list view model for rendering.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    /// Header information (title with result count).
    pub header: HeaderInfo,

    /// Search bar state, present while search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Main content area: rows, a loading indicator, or an alert.
    pub content: ListContent,

    /// Pagination bar, present while a page is displayed.
    pub pagination: Option<PaginationInfo>,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,
}

/// Main content of the list view, one variant per view state.
#[derive(Debug, Clone)]
pub enum ListContent {
    /// The query is in flight.
    Loading,
    /// The query failed or matched nothing; the alert says which.
    Alert(AlertInfo),
    /// A window of the displayed page's rows.
    Rows(Vec<CharacterRow>),
}

/// Display information for a single character row.
#[derive(Debug, Clone)]
pub struct CharacterRow {
    /// Display name, truncated to the column width.
    pub name: String,
    /// Species label, truncated to the column width.
    pub species: String,
    /// Normalized status for the badge column.
    pub status: Status,
    /// Whether this row is currently selected.
    pub is_selected: bool,
}

/// Complete detail view model for rendering.
#[derive(Debug, Clone)]
pub struct DetailViewModel {
    /// Header information (character name while loaded).
    pub header: HeaderInfo,
    /// Main content area.
    pub content: DetailContent,
    /// Footer information (keybinding hints).
    pub footer: FooterInfo,
}

/// Main content of the detail view.
#[derive(Debug, Clone)]
pub enum DetailContent {
    /// The query is in flight.
    Loading,
    /// The query failed (including "no such character").
    Alert(AlertInfo),
    /// The loaded character profile.
    Profile(ProfileInfo),
}

/// Loaded character profile, pre-formatted for rendering.
#[derive(Debug, Clone)]
pub struct ProfileInfo {
    /// Status for the badge line.
    pub status: Status,
    /// Label/value rows of the field table.
    pub fields: Vec<FieldRow>,
    /// Episode lines, already formatted as `CODE  title`.
    pub episodes: Vec<String>,
}

/// One label/value row of the detail field table.
#[derive(Debug, Clone)]
pub struct FieldRow {
    pub label: &'static str,
    pub value: String,
}

impl FieldRow {
    #[must_use]
    pub const fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Alert box display information (error or no-results).
#[derive(Debug, Clone)]
pub struct AlertInfo {
    /// Visual severity, controlling the alert color.
    pub severity: AlertSeverity,
    /// Alert text.
    pub title: String,
}

impl AlertInfo {
    /// The generic failure alert. Transport errors and absent payloads look
    /// identical to the user; the cure for both is a new query.
    #[must_use]
    pub fn error() -> Self {
        Self {
            severity: AlertSeverity::Error,
            title: "Error: Please refresh or try later".to_string(),
        }
    }

    /// The distinct no-results alert for an empty page.
    #[must_use]
    pub fn no_results() -> Self {
        Self {
            severity: AlertSeverity::Warning,
            title: "No data found. Try searching for something else.".to_string(),
        }
    }
}

/// Alert severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    /// Query failure.
    Error,
    /// Empty result set.
    Warning,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search text.
    pub query: String,
}

/// Pagination bar state: current page plus the windowed item sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Current 1-based page.
    pub current: u32,
    /// Total number of pages.
    pub total: u32,
    /// Items to render, with edge pages and ellipsis gaps.
    pub items: Vec<PageItem>,
}

impl PaginationInfo {
    /// Builds the pagination bar for the given position.
    #[must_use]
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current,
            total,
            items: pagination_items(current, total),
        }
    }
}

/// One element of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A numbered page.
    Page(u32),
    /// A gap between the edge and the window.
    Ellipsis,
}

/// Most numbered items a pagination bar shows before windowing kicks in.
const PAGINATION_WINDOW: u32 = 7;

/// Computes the windowed pagination items for `current` of `total` pages.
///
/// Small totals list every page. Larger totals keep both edge pages visible
/// and center a three-page window near the current page, with ellipsis
/// marking the gaps. All emitted pages are within `[1, total]`.
#[must_use]
pub fn pagination_items(current: u32, total: u32) -> Vec<PageItem> {
    if total <= PAGINATION_WINDOW {
        return (1..=total).map(PageItem::Page).collect();
    }

    let (window_start, window_end) = if current <= 4 {
        (2, 5)
    } else if current >= total - 3 {
        (total - 4, total - 1)
    } else {
        (current - 1, current + 1)
    };

    let mut items = vec![PageItem::Page(1)];
    if window_start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((window_start..=window_end).map(PageItem::Page));
    if window_end < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn pages(items: &[PageItem]) -> Vec<u32> {
        items
            .iter()
            .filter_map(|item| match item {
                Page(n) => Some(*n),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn small_totals_list_every_page() {
        // The §8 scenario: page 3 of 5 shows the full bounded range.
        let items = pagination_items(3, 5);
        assert_eq!(items, vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn large_totals_center_the_window_near_the_current_page() {
        let items = pagination_items(7, 12);
        assert_eq!(
            items,
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn windows_near_the_edges_do_not_emit_useless_gaps() {
        let items = pagination_items(2, 12);
        assert_eq!(
            items,
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(12)]
        );

        let items = pagination_items(11, 12);
        assert_eq!(
            items,
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12)]
        );
    }

    #[test]
    fn all_items_stay_within_bounds() {
        for total in 1..=30 {
            for current in 1..=total {
                let items = pagination_items(current, total);
                let numbers = pages(&items);
                assert!(numbers.iter().all(|n| *n >= 1 && *n <= total));
                assert!(numbers.contains(&current), "current {current} of {total} missing");
                assert!(numbers.windows(2).all(|w| w[0] < w[1]), "not ascending");
            }
        }
    }
}
