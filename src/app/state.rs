//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for selection management and UI view model
//! generation. It serves as the single source of truth for all transient UI
//! state.
//!
//! # Architecture
//!
//! `AppState` holds the current route, the persisted search criteria, and
//! one classified [`ViewState`] per controller (list and detail). The event
//! handler mutates it; view models are computed on demand from state
//! snapshots and contain no business logic.
//!
//! # State Components
//!
//! - **Route**: Which view is showing, plus the navigation history stack
//! - **Criteria**: Current page and search text, mirrored into the session store
//! - **List / Detail**: Classified outcome of the two remote queries
//! - **Selection**: Cursor position within the current page's rows
//! - **Input Mode**: Controls keybinding interpretation and UI layout

use crate::app::modes::{InputMode, Route, SearchFocus};
use crate::app::viewstate::ViewState;
use crate::domain::{CharacterDetail, CharacterSummary, PageResult, SearchCriteria};
use crate::query::ListVariables;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AlertInfo, CharacterRow, DetailContent, DetailViewModel, FieldRow, FooterInfo, HeaderInfo,
    ListContent, ListViewModel, PaginationInfo, ProfileInfo, SearchBarInfo, UIViewModel,
};

/// Width of the NAME column in the list table.
const NAME_COLUMN_WIDTH: usize = 32;

/// Width of the SPECIES column in the list table.
const SPECIES_COLUMN_WIDTH: usize = 16;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and query
/// resolutions. View models are computed on demand via
/// [`compute_viewmodel`](Self::compute_viewmodel).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current route (list or detail).
    pub route: Route,

    /// Previously visited routes; `go back` pops, `go home` clears.
    pub history: Vec<Route>,

    /// Current page and search text.
    ///
    /// Restored from the session store on load and persisted back on every
    /// mutation, in the same event turn as the mutation itself.
    pub criteria: SearchCriteria,

    /// Classified outcome of the paginated list query.
    pub list: ViewState<PageResult>,

    /// Classified outcome of the detail query.
    ///
    /// Only meaningful while the route is `Detail`; reset to `Loading` when
    /// a detail view is opened.
    pub detail: ViewState<CharacterDetail>,

    /// Variables of the most recently issued list query.
    ///
    /// The list query is re-issued only when freshly derived variables
    /// differ from these by value; this is what makes repeated no-op
    /// pagination events free.
    pub last_list_variables: Option<ListVariables>,

    /// Zero-based cursor position within the current page's rows.
    pub selected_index: usize,

    /// Current input handling mode (list view only).
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state from restored criteria and a theme.
    ///
    /// The list starts in `Loading`: a query for the restored criteria is
    /// issued as soon as the plugin is activated.
    #[must_use]
    pub fn new(criteria: SearchCriteria, theme: Theme) -> Self {
        Self {
            route: Route::List,
            history: vec![],
            criteria,
            list: ViewState::Loading,
            detail: ViewState::Loading,
            last_list_variables: None,
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
        }
    }

    /// Moves the selection cursor down by one row, wrapping to the top.
    ///
    /// No-op unless a page is currently displayed.
    pub fn move_selection_down(&mut self) {
        let Some(count) = self.row_count() else { return };
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    /// Moves the selection cursor up by one row, wrapping to the bottom.
    ///
    /// No-op unless a page is currently displayed.
    pub fn move_selection_up(&mut self) {
        let Some(count) = self.row_count() else { return };
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected character row, if a page is displayed.
    #[must_use]
    pub fn selected_character(&self) -> Option<&CharacterSummary> {
        self.list.ready()?.items.get(self.selected_index)
    }

    /// Clamps the selection cursor to the bounds of the displayed page.
    ///
    /// Called after a list resolution replaces the rows.
    pub fn clamp_selection(&mut self) {
        match self.row_count() {
            Some(count) if count > 0 => {
                self.selected_index = self.selected_index.min(count - 1);
            }
            _ => self.selected_index = 0,
        }
    }

    fn row_count(&self) -> Option<usize> {
        self.list.ready().map(|page| page.items.len())
    }

    /// Computes a renderable view model for the current route.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        match &self.route {
            Route::List => UIViewModel::List(self.compute_list_viewmodel(rows, cols)),
            Route::Detail { .. } => UIViewModel::Detail(self.compute_detail_viewmodel()),
        }
    }

    /// Computes the list view model: header, optional search bar, content
    /// (rows, loading, or alert), pagination, footer.
    ///
    /// # Windowing
    ///
    /// When a page is displayed, only a window of rows fitting the terminal
    /// is emitted, centered on the selection: the window midpoint tracks the
    /// cursor and shifts at the edges to keep the window full.
    fn compute_list_viewmodel(&self, rows: usize, cols: usize) -> ListViewModel {
        let header = HeaderInfo {
            title: match self.list.ready() {
                Some(page) => format!(" Rick & Morty Characters ({} found) ", page.total_count),
                None => " Rick & Morty Characters ".to_string(),
            },
        };

        let search_bar = if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.criteria.search_text.clone(),
            })
        } else {
            None
        };

        let content = match &self.list {
            ViewState::Loading => ListContent::Loading,
            ViewState::Failed => ListContent::Alert(AlertInfo::error()),
            ViewState::Empty => ListContent::Alert(AlertInfo::no_results()),
            ViewState::Ready(page) => self.compute_rows(page, rows, cols),
        };

        let pagination = self.list.ready().map(|page| {
            PaginationInfo::new(self.criteria.page, page.total_pages)
        });

        ListViewModel {
            header,
            search_bar,
            content,
            pagination,
            footer: self.compute_list_footer(),
        }
    }

    /// Computes the windowed table rows for a displayed page.
    fn compute_rows(&self, page: &PageResult, rows: usize, _cols: usize) -> ListContent {
        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(page.items.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && page.items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let rows = page.items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, character)| {
                let absolute_idx = visible_start + relative_idx;
                CharacterRow {
                    name: truncate(&character.name, NAME_COLUMN_WIDTH),
                    species: truncate(&character.species, SPECIES_COLUMN_WIDTH),
                    status: character.status,
                    is_selected: absolute_idx == self.selected_index,
                }
            })
            .collect();

        ListContent::Rows(rows)
    }

    /// Computes the detail view model for the character behind the current
    /// detail route.
    fn compute_detail_viewmodel(&self) -> DetailViewModel {
        let (title, content) = match &self.detail {
            ViewState::Loading => (" Character ".to_string(), DetailContent::Loading),
            // A missing character and a transport failure are deliberately
            // indistinguishable here; the detail view has no empty state.
            ViewState::Failed | ViewState::Empty => {
                (" Character ".to_string(), DetailContent::Alert(AlertInfo::error()))
            }
            ViewState::Ready(detail) => {
                let fields = vec![
                    FieldRow::new("Gender", detail.gender.clone()),
                    FieldRow::new("Species", detail.species.clone()),
                    FieldRow::new("Origin", detail.origin.describe()),
                    FieldRow::new("Location", detail.location.describe()),
                    FieldRow::new("Created", detail.created_label()),
                    FieldRow::new("Portrait", detail.image_url.clone()),
                ];
                let episodes = detail
                    .episodes
                    .iter()
                    .map(|e| format!("{}  {}", e.code, e.name))
                    .collect();

                (
                    format!(" {} ", detail.name),
                    DetailContent::Profile(ProfileInfo {
                        status: detail.status,
                        fields,
                        episodes,
                    }),
                )
            }
        };

        DetailViewModel {
            header: HeaderInfo { title },
            content,
            footer: FooterInfo {
                keybindings: "Esc/b: back  h: home  t: theme  q: quit".to_string(),
            },
        }
    }

    /// Computes footer keybinding hints for the list view.
    fn compute_list_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: clear search  Enter: results  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: clear search  /: edit query  j/k: navigate  Enter: details".to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  Enter: details  /: search  h/l: page  g/G: first/last  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Calculates rows available for the table after subtracting UI chrome.
    ///
    /// Accounts for the top margin, header, borders, table header,
    /// pagination line, and footer; search mode adds the 3-line search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(8),
            InputMode::Search(_) => total_rows.saturating_sub(11),
        }
    }
}

/// Truncates a string to `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;

    fn page(count: usize) -> PageResult {
        PageResult {
            total_count: count as u32,
            total_pages: 1,
            items: (0..count)
                .map(|i| CharacterSummary {
                    id: i.to_string(),
                    name: format!("character-{i}"),
                    image_url: String::new(),
                    species: "Human".to_string(),
                    status: Status::Alive,
                })
                .collect(),
        }
    }

    fn ready_state(count: usize) -> AppState {
        let mut state = AppState::new(SearchCriteria::default(), Theme::default());
        state.list = ViewState::Ready(page(count));
        state
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = ready_state(3);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);

        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_inert_without_a_displayed_page() {
        let mut state = AppState::new(SearchCriteria::default(), Theme::default());
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_character().is_none());
    }

    #[test]
    fn clamp_pulls_the_cursor_back_into_bounds() {
        let mut state = ready_state(20);
        state.selected_index = 15;

        state.list = ViewState::Ready(page(3));
        state.clamp_selection();
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn failed_list_renders_the_error_alert() {
        let mut state = ready_state(1);
        state.list = ViewState::Failed;

        match state.compute_viewmodel(24, 80) {
            UIViewModel::List(vm) => {
                assert!(matches!(vm.content, ListContent::Alert(_)));
                assert!(vm.pagination.is_none());
            }
            UIViewModel::Detail(_) => panic!("expected list view model"),
        }
    }

    #[test]
    fn ready_list_windows_rows_around_the_selection() {
        let mut state = ready_state(20);
        state.selected_index = 10;

        match state.compute_viewmodel(17, 80) {
            UIViewModel::List(vm) => match vm.content {
                ListContent::Rows(rows) => {
                    // 17 terminal rows leave 9 for the table.
                    assert_eq!(rows.len(), 9);
                    assert!(rows.iter().any(|r| r.is_selected));
                }
                other => panic!("expected rows, got {other:?}"),
            },
            UIViewModel::Detail(_) => panic!("expected list view model"),
        }
    }

    #[test]
    fn a_restored_mid_catalog_page_renders_bounded_pagination() {
        // Session restored to page 3; the query resolved 20 rows of 5 pages.
        let mut state = AppState::new(SearchCriteria::new(3, String::new()), Theme::default());
        let mut mid_page = page(20);
        mid_page.total_pages = 5;
        mid_page.total_count = 50;
        state.list = ViewState::Ready(mid_page);

        match state.compute_viewmodel(30, 80) {
            UIViewModel::List(vm) => {
                let pagination = vm.pagination.expect("pagination renders with data");
                assert_eq!(pagination.current, 3);
                assert_eq!(pagination.total, 5);
                assert_eq!(pagination.items.len(), 5);
                assert!(vm.header.title.contains("50 found"));
            }
            UIViewModel::Detail(_) => panic!("expected list view model"),
        }
    }

    #[test]
    fn long_names_are_truncated_for_the_name_column() {
        assert_eq!(truncate("a-very-long-character-name-that-overflows-the-column", 16).len(), 16);
        assert_eq!(truncate("short", 16), "short");
    }
}
