//! List/form state machines shared by every screen.

use fridgemate_client::ApiError;

/// Lifecycle of one fetched list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load succeeded.
    Loaded(T),
    /// The last load failed with a banner message.
    Error(String),
}

impl<T> ListState<T> {
    /// The loaded data, if any.
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if the last load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Ticket for one load request issued by a [`LoadSequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Issues monotonically increasing tokens so that when loads overlap, the
/// most recently *requested* one wins. Completions carrying a stale token
/// are discarded instead of overwriting newer data.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    issued: u64,
}

impl LoadSequencer {
    /// Start a new load, invalidating every token issued before it.
    pub const fn begin(&mut self) -> LoadToken {
        self.issued += 1;
        LoadToken(self.issued)
    }

    /// Whether `token` is still the latest issued load.
    pub const fn is_current(&self, token: LoadToken) -> bool {
        token.0 == self.issued
    }
}

/// A [`ListState`] guarded by a [`LoadSequencer`].
///
/// Screens drive it in two phases: `begin()` before issuing the request,
/// `finish()` with the token once the response arrives. A finish whose token
/// has been superseded is a no-op.
#[derive(Debug, Default)]
pub struct TrackedList<T> {
    state: ListState<T>,
    sequencer: LoadSequencer,
}

impl<T> TrackedList<T> {
    pub const fn new() -> Self {
        Self {
            state: ListState::Idle,
            sequencer: LoadSequencer { issued: 0 },
        }
    }

    /// Enter `Loading` and claim a token for the request about to be sent.
    pub fn begin(&mut self) -> LoadToken {
        self.state = ListState::Loading;
        self.sequencer.begin()
    }

    /// Record the outcome of the load identified by `token`. Stale tokens
    /// are ignored.
    pub fn finish(&mut self, token: LoadToken, result: Result<T, ApiError>) {
        if !self.sequencer.is_current(token) {
            return;
        }
        self.state = match result {
            Ok(data) => ListState::Loaded(data),
            Err(error) => ListState::Error(error.to_string()),
        };
    }

    pub const fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub const fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

/// Form sub-state, independent of the list lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode<Id> {
    /// No form open.
    #[default]
    Closed,
    /// Creating a new record.
    Creating,
    /// Editing the record with this ID.
    Editing(Id),
}

impl<Id> FormMode<Id> {
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_list_success_and_failure() {
        let mut list: TrackedList<Vec<i64>> = TrackedList::new();
        assert_eq!(*list.state(), ListState::Idle);

        let token = list.begin();
        assert!(list.is_loading());
        list.finish(token, Ok(vec![1, 2]));
        assert_eq!(list.data(), Some(&vec![1, 2]));

        let token = list.begin();
        list.finish(token, Err(ApiError::Api("실패".to_owned())));
        assert_eq!(list.error(), Some("실패"));
        assert!(list.data().is_none());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut list: TrackedList<Vec<&str>> = TrackedList::new();

        let first = list.begin();
        let second = list.begin();

        // Newer request completes first.
        list.finish(second, Ok(vec!["new"]));
        assert_eq!(list.data(), Some(&vec!["new"]));

        // Older response arrives late and must not overwrite.
        list.finish(first, Ok(vec!["old"]));
        assert_eq!(list.data(), Some(&vec!["new"]));
    }

    #[test]
    fn test_stale_error_does_not_clobber_loaded_data() {
        let mut list: TrackedList<Vec<i64>> = TrackedList::new();

        let first = list.begin();
        let second = list.begin();
        list.finish(second, Ok(vec![7]));
        list.finish(first, Err(ApiError::Api("늦은 실패".to_owned())));

        assert_eq!(list.data(), Some(&vec![7]));
        assert!(list.error().is_none());
    }

    #[test]
    fn test_form_mode_helpers() {
        let closed: FormMode<i64> = FormMode::Closed;
        assert!(!closed.is_open());
        assert!(FormMode::<i64>::Creating.is_open());
        assert!(FormMode::Editing(3_i64).is_editing());
        assert!(!FormMode::<i64>::Creating.is_editing());
    }
}
