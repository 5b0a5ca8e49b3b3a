//! View-state classification shared by both controllers.
//!
//! A query's outcome is described by three signals (still loading, an
//! error, an optional payload) and the UI needs exactly one thing to
//! render. [`classify`] collapses the signals into a [`ViewState`] with a
//! fixed precedence, defined once so the list and detail controllers can
//! never disagree about it:
//!
//! 1. `Loading` wins over everything else.
//! 2. `Failed` wins over `Empty` and `Ready`: an errored query is never
//!    reported `Ready` with stale data, and a finished query without a
//!    payload is indistinguishable from an error.
//! 3. `Empty` (when the predicate says so) wins over `Ready`.
//! 4. `Ready` carries the payload.

/// Tagged classification of a query's current outcome.
///
/// Exactly one variant is active at a time. `Empty` only ever applies to
/// the list view, a successful query with zero rows; the detail view
/// classifies a missing character as `Failed`, because the remote API
/// reports "not found" only as an absent payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// A query for the current inputs is in flight.
    Loading,
    /// The query errored or finished without a payload.
    Failed,
    /// The query succeeded with zero items.
    Empty,
    /// The query succeeded; the payload is current.
    Ready(T),
}

impl<T> ViewState<T> {
    /// Returns the payload of a `Ready` state.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Collapses a query's tri-state signals into a [`ViewState`].
///
/// `empty_when` decides whether a payload counts as empty; callers without
/// an empty notion (the detail view) pass a predicate that is always false.
///
/// # Examples
///
/// ```
/// use zortal::app::viewstate::{classify, ViewState};
///
/// let state = classify(false, None, Some(vec![1, 2]), |items: &Vec<i32>| items.is_empty());
/// assert_eq!(state, ViewState::Ready(vec![1, 2]));
/// ```
pub fn classify<T, F>(loading: bool, error: Option<String>, data: Option<T>, empty_when: F) -> ViewState<T>
where
    F: FnOnce(&T) -> bool,
{
    if loading {
        return ViewState::Loading;
    }

    match (error, data) {
        (Some(_), _) | (None, None) => ViewState::Failed,
        (None, Some(value)) => {
            if empty_when(&value) {
                ViewState::Empty
            } else {
                ViewState::Ready(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never_empty(_: &u32) -> bool {
        false
    }

    #[test]
    fn loading_wins_over_everything() {
        assert_eq!(
            classify(true, Some("boom".to_string()), Some(1), never_empty),
            ViewState::Loading
        );
        assert_eq!(classify::<u32, _>(true, None, None, never_empty), ViewState::Loading);
    }

    #[test]
    fn an_error_is_failed_even_with_data_present() {
        assert_eq!(
            classify(false, Some("boom".to_string()), Some(1), never_empty),
            ViewState::Failed
        );
    }

    #[test]
    fn absent_data_without_error_is_failed() {
        assert_eq!(classify::<u32, _>(false, None, None, never_empty), ViewState::Failed);
    }

    #[test]
    fn empty_payloads_classify_empty_when_the_predicate_says_so() {
        let state = classify(false, None, Some(Vec::<u32>::new()), |items| items.is_empty());
        assert_eq!(state, ViewState::Empty);
    }

    #[test]
    fn an_error_wins_over_an_empty_payload() {
        let state = classify(
            false,
            Some("boom".to_string()),
            Some(Vec::<u32>::new()),
            |items| items.is_empty(),
        );
        assert_eq!(state, ViewState::Failed);
    }

    #[test]
    fn a_populated_payload_is_ready() {
        let state = classify(false, None, Some(vec![1]), |items: &Vec<u32>| items.is_empty());
        assert_eq!(state, ViewState::Ready(vec![1]));
    }

    #[test]
    fn without_an_empty_notion_payloads_are_always_ready() {
        assert_eq!(classify(false, None, Some(0), never_empty), ViewState::Ready(0));
    }
}
