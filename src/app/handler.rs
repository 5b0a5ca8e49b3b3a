//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and query resolutions, translating them into state changes and action
//! sequences. It is where both controllers live: the list controller
//! (criteria, pagination, search, list classification) and the detail
//! controller (route id, detail classification, back/home navigation).
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim (user input or resolved queries)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Re-fetch discipline
//!
//! Every mutation of the search criteria funnels through one place that
//! derives fresh query variables and compares them, by value, to the
//! variables of the last issued query. Only a difference issues a new
//! query; this gives reactive re-fetch on input change, makes repeated
//! no-op events (first-page on page 1, a 1-character filter after an empty
//! one) free, and pairs with the query client's token stamping to keep
//! stale responses away from view state.

use crate::app::modes::{InputMode, Route, SearchFocus};
use crate::app::viewstate::{classify, ViewState};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{CharacterDetail, PageResult};
use crate::query::{ListVariables, QueryResolution};
use crate::ui::theme::Theme;

/// Events triggered by user input or resolved queries.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Permissions granted; issue the initial query for restored criteria.
    Activated,

    /// Moves the selection cursor down by one row (wraps to top).
    SelectionDown,
    /// Moves the selection cursor up by one row (wraps to bottom).
    SelectionUp,
    /// Opens the detail view for the selected row.
    OpenSelected,

    /// Navigates to the previous history entry.
    GoBack,
    /// Navigates to the list root, clearing history.
    GoHome,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Enters search mode with typing focus, clearing any active filter.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the result rows while keeping the filter active.
    FocusResults,
    /// Exits search mode, clearing the filter.
    ExitSearch,
    /// Appends a character to the search text.
    Char(char),
    /// Removes the last character from the search text.
    Backspace,
    /// Clears the search text and returns to normal mode.
    Escape,

    /// Advances to the next page.
    NextPage,
    /// Returns to the previous page.
    PreviousPage,
    /// Jumps to the first page.
    FirstPage,
    /// Jumps to the last page of the current result.
    LastPage,
    /// Jumps to a specific page.
    GoToPage(u32),

    /// Cycles to the next built-in color scheme.
    CycleTheme,

    /// The list query finished (already stale-filtered by the query client).
    ListQueryResolved(QueryResolution<PageResult>),
    /// The detail query finished (already stale-filtered by the query client).
    DetailQueryResolved(QueryResolution<CharacterDetail>),
}

impl Event {
    /// Short name for tracing, without payload noise.
    const fn name(&self) -> &'static str {
        match self {
            Self::Activated => "Activated",
            Self::SelectionDown => "SelectionDown",
            Self::SelectionUp => "SelectionUp",
            Self::OpenSelected => "OpenSelected",
            Self::GoBack => "GoBack",
            Self::GoHome => "GoHome",
            Self::CloseFocus => "CloseFocus",
            Self::SearchMode => "SearchMode",
            Self::FocusSearchBar => "FocusSearchBar",
            Self::FocusResults => "FocusResults",
            Self::ExitSearch => "ExitSearch",
            Self::Char(_) => "Char",
            Self::Backspace => "Backspace",
            Self::Escape => "Escape",
            Self::NextPage => "NextPage",
            Self::PreviousPage => "PreviousPage",
            Self::FirstPage => "FirstPage",
            Self::LastPage => "LastPage",
            Self::GoToPage(_) => "GoToPage",
            Self::CycleTheme => "CycleTheme",
            Self::ListQueryResolved(_) => "ListQueryResolved",
            Self::DetailQueryResolved(_) => "DetailQueryResolved",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed, and the side effects
/// to execute in sequence. The shim executes persists and fetches within
/// the same turn, so a criteria mutation and its session-store write are
/// never observably apart.
///
/// # Errors
///
/// Returns errors from state mutation helpers; pure navigation and
/// classification cannot fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::Activated => {
            let mut actions = vec![];
            sync_list_query(state, &mut actions);
            Ok((true, actions))
        }

        Event::SelectionDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::SelectionUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }

        Event::OpenSelected => {
            let Some(character) = state.selected_character() else {
                tracing::debug!("no row selected");
                return Ok((false, vec![]));
            };
            let id = character.id.clone();

            tracing::debug!(character_id = %id, "opening detail view");
            state.history.push(state.route.clone());
            state.route = Route::Detail { id: id.clone() };
            state.detail = ViewState::Loading;
            Ok((true, vec![Action::FetchDetail { character_id: id }]))
        }

        Event::GoBack => match state.history.pop() {
            Some(route) => {
                tracing::debug!(route = ?route, "navigating back");
                state.route = route;
                Ok((true, vec![]))
            }
            None => Ok((false, vec![])),
        },

        Event::GoHome => {
            if state.route == Route::List {
                return Ok((false, vec![]));
            }
            tracing::debug!("navigating home");
            state.route = Route::List;
            state.history.clear();
            Ok((true, vec![]))
        }

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            let mut actions = vec![];
            set_search_text(state, String::new(), &mut actions);
            Ok((true, actions))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.criteria.search_text.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.criteria.search_text, "exiting search mode");
            state.input_mode = InputMode::Normal;
            let mut actions = vec![];
            set_search_text(state, String::new(), &mut actions);
            Ok((true, actions))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            let mut text = state.criteria.search_text.clone();
            text.push(*c);

            let mut actions = vec![];
            set_search_text(state, text, &mut actions);
            Ok((true, actions))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            let mut text = state.criteria.search_text.clone();
            text.pop();

            let mut actions = vec![];
            set_search_text(state, text, &mut actions);
            Ok((true, actions))
        }
        Event::Escape => {
            state.input_mode = InputMode::Normal;
            let mut actions = vec![];
            set_search_text(state, String::new(), &mut actions);
            Ok((true, actions))
        }

        // Pagination is only interactive while a page is displayed, the
        // same way the pagination control only renders alongside data. The
        // target page itself is computed unclamped.
        Event::NextPage => paginate(state, |page, result| {
            (page < result.total_pages).then(|| page + 1)
        }),
        Event::PreviousPage => paginate(state, |page, _| (page > 1).then(|| page - 1)),
        Event::FirstPage => paginate(state, |_, _| Some(1)),
        Event::LastPage => paginate(state, |_, result| Some(result.total_pages)),
        Event::GoToPage(n) => {
            let n = *n;
            paginate(state, move |_, result| {
                (n >= 1 && n <= result.total_pages).then_some(n)
            })
        }

        Event::CycleTheme => {
            state.theme = Theme::next_builtin(&state.theme.name);
            tracing::debug!(theme = %state.theme.name, "switched theme");
            Ok((true, vec![]))
        }

        Event::ListQueryResolved(resolution) => {
            if let Some(error) = &resolution.error {
                tracing::warn!(error = %error, "list query failed");
            }
            state.list = classify(
                false,
                resolution.error.clone(),
                resolution.data.clone(),
                |page: &PageResult| page.items.is_empty(),
            );
            state.clamp_selection();
            Ok((true, vec![]))
        }

        Event::DetailQueryResolved(resolution) => {
            if !matches!(state.route, Route::Detail { .. }) {
                tracing::debug!("detail resolution after leaving detail view, ignoring");
                return Ok((false, vec![]));
            }
            if let Some(error) = &resolution.error {
                tracing::warn!(error = %error, "detail query failed");
            }
            // The detail view has no empty state: an absent payload is a
            // failure, exactly like an explicit error.
            state.detail = classify(
                false,
                resolution.error.clone(),
                resolution.data.clone(),
                |_| false,
            );
            Ok((true, vec![]))
        }
    }
}

/// Applies a pagination event.
///
/// `target` receives the current page and the displayed result and returns
/// the destination page, or `None` when the affordance is disabled (e.g.
/// previous on page 1). No-op unless a page is displayed.
fn paginate<F>(state: &mut AppState, target: F) -> Result<(bool, Vec<Action>)>
where
    F: FnOnce(u32, &PageResult) -> Option<u32>,
{
    let Some(result) = state.list.ready() else {
        return Ok((false, vec![]));
    };
    let Some(destination) = target(state.criteria.page, result) else {
        return Ok((false, vec![]));
    };

    let mut actions = vec![];
    let changed = set_page(state, destination, &mut actions);
    Ok((changed, actions))
}

/// Sets the current page, persisting it and re-syncing the list query.
///
/// A destination equal to the current page is a no-op: nothing is
/// persisted and no query is issued.
fn set_page(state: &mut AppState, page: u32, actions: &mut Vec<Action>) -> bool {
    if state.criteria.page == page {
        tracing::debug!(page = page, "already on requested page");
        return false;
    }

    tracing::debug!(from = state.criteria.page, to = page, "changing page");
    state.criteria.page = page;
    actions.push(Action::PersistPage(page));
    sync_list_query(state, actions);
    true
}

/// Sets the search text, resetting the page, persisting both keys, and
/// re-syncing the list query.
///
/// The page is reset to 1 before the new filter applies so a narrower
/// result set can never leave the view on an out-of-range page. Unchanged
/// text is a no-op.
fn set_search_text(state: &mut AppState, text: String, actions: &mut Vec<Action>) -> bool {
    if state.criteria.search_text == text {
        return false;
    }

    tracing::debug!(query = %text, "search text changed");
    state.criteria.page = 1;
    state.criteria.search_text = text;
    actions.push(Action::PersistPage(1));
    actions.push(Action::PersistSearchText(state.criteria.search_text.clone()));
    sync_list_query(state, actions);
    true
}

/// Re-derives the list query variables and issues the query if they differ,
/// by value, from the last issued ones.
fn sync_list_query(state: &mut AppState, actions: &mut Vec<Action>) -> bool {
    let variables = ListVariables::from_criteria(&state.criteria);
    if state.last_list_variables.as_ref() == Some(&variables) {
        tracing::debug!("list variables unchanged, skipping query");
        return false;
    }

    tracing::debug!(
        page = variables.page,
        has_filter = variables.filter.is_some(),
        "list variables changed, issuing query"
    );
    state.list = ViewState::Loading;
    state.selected_index = 0;
    state.last_list_variables = Some(variables.clone());
    actions.push(Action::FetchList(variables));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CharacterSummary, SearchCriteria, Status};
    use crate::query::request::NameFilter;

    fn page_result(items: usize, pages: u32, count: u32) -> PageResult {
        PageResult {
            total_count: count,
            total_pages: pages,
            items: (0..items)
                .map(|i| CharacterSummary {
                    id: (i + 1).to_string(),
                    name: format!("character-{i}"),
                    image_url: String::new(),
                    species: "Human".to_string(),
                    status: Status::Alive,
                })
                .collect(),
        }
    }

    /// State as it looks after the initial query for `page` resolved.
    fn ready_state(page: u32, pages: u32) -> AppState {
        let mut state = AppState::new(
            SearchCriteria::new(page, String::new()),
            Theme::default(),
        );
        state.last_list_variables = Some(ListVariables::from_criteria(&state.criteria));
        state.list = ViewState::Ready(page_result(20, pages, pages * 20));
        state
    }

    fn fetches(actions: &[Action]) -> Vec<&ListVariables> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::FetchList(vars) => Some(vars),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn activation_issues_the_query_for_restored_criteria() {
        let mut state = AppState::new(
            SearchCriteria::new(3, String::new()),
            Theme::default(),
        );

        let (_, actions) = handle_event(&mut state, &Event::Activated).unwrap();
        assert_eq!(
            fetches(&actions),
            vec![&ListVariables { page: 3, filter: None }]
        );
        assert_eq!(state.list, ViewState::Loading);
    }

    #[test]
    fn typing_resets_the_page_and_persists_both_keys() {
        let mut state = ready_state(3, 5);
        state.input_mode = InputMode::Search(SearchFocus::Typing);

        let (_, actions) = handle_event(&mut state, &Event::Char('R')).unwrap();

        assert_eq!(state.criteria.page, 1);
        assert!(actions.contains(&Action::PersistPage(1)));
        assert!(actions.contains(&Action::PersistSearchText("R".to_string())));
    }

    #[test]
    fn one_character_filters_are_sent_as_null() {
        let mut state = ready_state(3, 5);
        state.input_mode = InputMode::Search(SearchFocus::Typing);

        let (_, actions) = handle_event(&mut state, &Event::Char('R')).unwrap();

        // The page changed, so a query goes out, but with no filter yet.
        assert_eq!(
            fetches(&actions),
            vec![&ListVariables { page: 1, filter: None }]
        );
    }

    #[test]
    fn the_second_character_activates_the_filter() {
        let mut state = ready_state(1, 5);
        state.input_mode = InputMode::Search(SearchFocus::Typing);

        // "R": page already 1, filter still null, variables unchanged.
        let (_, actions) = handle_event(&mut state, &Event::Char('R')).unwrap();
        assert!(fetches(&actions).is_empty());

        // "Ri": filter crosses the threshold.
        let (_, actions) = handle_event(&mut state, &Event::Char('i')).unwrap();
        assert_eq!(
            fetches(&actions),
            vec![&ListVariables {
                page: 1,
                filter: Some(NameFilter { name: "Ri".to_string() }),
            }]
        );
    }

    #[test]
    fn first_page_is_idempotent() {
        let mut state = ready_state(3, 5);

        let (_, actions) = handle_event(&mut state, &Event::FirstPage).unwrap();
        assert_eq!(state.criteria.page, 1);
        assert_eq!(fetches(&actions).len(), 1);

        // Second call: still page 1, no second query.
        let (_, actions) = handle_event(&mut state, &Event::FirstPage).unwrap();
        assert_eq!(state.criteria.page, 1);
        assert!(actions.is_empty());
    }

    #[test]
    fn previous_page_never_goes_below_one() {
        let mut state = ready_state(1, 5);

        let (changed, actions) = handle_event(&mut state, &Event::PreviousPage).unwrap();
        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.criteria.page, 1);
    }

    #[test]
    fn next_page_stops_at_the_last_page() {
        let mut state = ready_state(5, 5);

        let (changed, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(!changed);
        assert!(actions.is_empty());
    }

    #[test]
    fn last_page_uses_the_displayed_result() {
        let mut state = ready_state(2, 5);

        let (_, actions) = handle_event(&mut state, &Event::LastPage).unwrap();
        assert_eq!(state.criteria.page, 5);
        assert!(actions.contains(&Action::PersistPage(5)));
    }

    #[test]
    fn pagination_is_inert_without_a_displayed_result() {
        let mut state = AppState::new(SearchCriteria::new(3, String::new()), Theme::default());
        state.list = ViewState::Failed;

        for event in [Event::NextPage, Event::PreviousPage, Event::LastPage, Event::FirstPage] {
            let (changed, actions) = handle_event(&mut state, &event).unwrap();
            assert!(!changed);
            assert!(actions.is_empty());
        }
        assert_eq!(state.criteria.page, 3);
    }

    #[test]
    fn a_resolved_page_classifies_ready() {
        let mut state = ready_state(3, 5);
        state.list = ViewState::Loading;

        let resolution = QueryResolution::of(Some(page_result(20, 5, 50)));
        handle_event(&mut state, &Event::ListQueryResolved(resolution)).unwrap();

        let page = state.list.ready().expect("ready");
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn zero_rows_classify_empty_and_errors_classify_failed() {
        let mut state = ready_state(1, 1);

        let empty = QueryResolution::of(Some(page_result(0, 0, 0)));
        handle_event(&mut state, &Event::ListQueryResolved(empty)).unwrap();
        assert_eq!(state.list, ViewState::Empty);

        let failed = QueryResolution::failed("boom");
        handle_event(&mut state, &Event::ListQueryResolved(failed)).unwrap();
        assert_eq!(state.list, ViewState::Failed);
    }

    #[test]
    fn opening_a_row_navigates_and_fetches_the_detail() {
        let mut state = ready_state(1, 1);
        state.selected_index = 2;

        let (_, actions) = handle_event(&mut state, &Event::OpenSelected).unwrap();

        assert_eq!(state.route, Route::Detail { id: "3".to_string() });
        assert_eq!(state.detail, ViewState::Loading);
        assert_eq!(
            actions,
            vec![Action::FetchDetail { character_id: "3".to_string() }]
        );
    }

    #[test]
    fn a_missing_character_classifies_failed() {
        let mut state = ready_state(1, 1);
        handle_event(&mut state, &Event::OpenSelected).unwrap();

        // data == null, error == null: the remote side's "not found".
        let resolution = QueryResolution::<CharacterDetail>::of(None);
        handle_event(&mut state, &Event::DetailQueryResolved(resolution)).unwrap();
        assert_eq!(state.detail, ViewState::Failed);
    }

    #[test]
    fn back_and_home_navigate_the_history() {
        let mut state = ready_state(1, 1);
        handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert!(matches!(state.route, Route::Detail { .. }));

        handle_event(&mut state, &Event::GoBack).unwrap();
        assert_eq!(state.route, Route::List);

        handle_event(&mut state, &Event::OpenSelected).unwrap();
        handle_event(&mut state, &Event::GoHome).unwrap();
        assert_eq!(state.route, Route::List);
        assert!(state.history.is_empty());
    }

    #[test]
    fn detail_resolutions_after_leaving_the_view_are_ignored() {
        let mut state = ready_state(1, 1);
        handle_event(&mut state, &Event::OpenSelected).unwrap();
        handle_event(&mut state, &Event::GoBack).unwrap();

        let resolution = QueryResolution::<CharacterDetail>::failed("late");
        let (changed, _) =
            handle_event(&mut state, &Event::DetailQueryResolved(resolution)).unwrap();
        assert!(!changed);
    }

    #[test]
    fn exiting_search_clears_the_filter_and_requeries() {
        let mut state = ready_state(1, 5);
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        handle_event(&mut state, &Event::Char('R')).unwrap();
        handle_event(&mut state, &Event::Char('i')).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::ExitSearch).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.criteria.search_text, "");
        assert!(actions.contains(&Action::PersistSearchText(String::new())));
        assert_eq!(
            fetches(&actions),
            vec![&ListVariables { page: 1, filter: None }]
        );
    }
}
