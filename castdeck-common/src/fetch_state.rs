//! Fetch lifecycle state shared by the status and device-list stores.

/// State of a remotely-fetched value: the last good value, whether a fetch
/// is in flight, and the last error.
///
/// `loading` is a flag, not an exclusive state: a refresh may overlap a
/// previously loaded or errored snapshot. A failed fetch records its error
/// alongside the last good value rather than clearing it, so the UI can keep
/// showing stale data with an inline error.
///
/// Overlapping refreshes are deliberately not coalesced. `begin` and
/// `resolve` are unconditional writes, so whichever response lands last
/// determines the snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    /// The last successfully fetched value, if any.
    pub value: Option<T>,
    /// Whether a fetch is currently in flight.
    pub loading: bool,
    /// Error from the most recent failed fetch.
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            value: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Mark a fetch as started: raises `loading` and clears the error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome of a fetch and drop `loading`.
    ///
    /// A failure leaves the previous value untouched.
    pub fn resolve(&mut self, result: Result<T, String>) {
        match result {
            Ok(value) => self.value = Some(value),
            Err(error) => self.error = Some(error),
        }
        self.loading = false;
    }

    /// True once at least one fetch has succeeded.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> FetchState<Vec<T>> {
    /// True while a fetch is in flight and there is nothing to show yet.
    pub fn is_searching(&self) -> bool {
        self.loading && self.value.as_ref().map_or(true, |items| items.is_empty())
    }

    /// True once a fetch completed and genuinely found nothing. False before
    /// the first fetch resolves, so an empty default never flashes as an
    /// empty result.
    pub fn found_nothing(&self) -> bool {
        !self.loading && self.value.as_ref().is_some_and(|items| items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_sets_loading_and_clears_error() {
        let mut state = FetchState::<u32>::default();
        state.resolve(Err("unreachable".into()));
        assert_eq!(state.error.as_deref(), Some("unreachable"));

        state.begin();
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_successful_resolve_stores_value() {
        let mut state = FetchState::default();
        state.begin();
        state.resolve(Ok(7));
        assert_eq!(state.value, Some(7));
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failed_resolve_preserves_previous_value() {
        let mut state = FetchState::default();
        state.begin();
        state.resolve(Ok(7));

        state.begin();
        state.resolve(Err("timed out".into()));
        assert_eq!(state.value, Some(7));
        assert_eq!(state.error.as_deref(), Some("timed out"));
        assert!(!state.loading);
    }

    #[test]
    fn test_overlapping_refreshes_last_write_wins() {
        let mut state = FetchState::default();

        // Two refreshes issued before either resolves.
        state.begin();
        state.begin();
        assert!(state.loading);

        // First-issued call resolves first, second resolves later.
        state.resolve(Ok(1));
        state.resolve(Ok(2));
        assert_eq!(state.value, Some(2));
        assert!(!state.loading);
    }

    #[test]
    fn test_late_failure_overwrites_earlier_success() {
        let mut state = FetchState::default();
        state.begin();
        state.begin();
        state.resolve(Ok(1));
        state.resolve(Err("device went away".into()));

        // The error wins, but the earlier value stays visible.
        assert_eq!(state.value, Some(1));
        assert_eq!(state.error.as_deref(), Some("device went away"));
    }

    #[test]
    fn test_searching_only_while_loading_with_nothing_to_show() {
        let mut state = FetchState::<Vec<u32>>::default();
        assert!(!state.is_searching());

        state.begin();
        assert!(state.is_searching());

        state.resolve(Ok(vec![1]));
        assert!(!state.is_searching());

        // A re-fetch with results on screen is not "searching".
        state.begin();
        assert!(!state.is_searching());
    }

    #[test]
    fn test_empty_fetch_shows_found_nothing_not_searching() {
        let mut state = FetchState::<Vec<u32>>::default();
        // Nothing fetched yet: the empty default is not an empty result.
        assert!(!state.found_nothing());

        state.begin();
        assert!(!state.found_nothing());

        state.resolve(Ok(vec![]));
        assert!(state.found_nothing());
        assert!(!state.is_searching());
    }

    #[test]
    fn test_found_nothing_clears_once_devices_appear() {
        let mut state = FetchState::default();
        state.begin();
        state.resolve(Ok(Vec::<u32>::new()));
        assert!(state.found_nothing());

        state.begin();
        state.resolve(Ok(vec![1, 2]));
        assert!(!state.found_nothing());
    }

    #[test]
    fn test_loading_true_strictly_during_fetch() {
        let mut state = FetchState::<u32>::default();
        assert!(!state.loading);
        state.begin();
        assert!(state.loading);
        state.resolve(Ok(0));
        assert!(!state.loading);
    }
}
