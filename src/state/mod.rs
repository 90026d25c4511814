//! View state for the ingest / vibe-search page.
//!
//! All mutable UI state lives in one [`VibeState`]. It is only changed through
//! the `begin_*` / `finish_*` operations of the library, ingest and search
//! controllers, so a controller's in-flight guard and the independence of the
//! library and the result set cannot be bypassed by a view.
//!
//! Network calls are not made here. The async drivers in [`store`] run a
//! `begin_*` step, await the backend with no state borrowed, then hand the
//! outcome to the matching `finish_*` step.

mod ingest;
mod library;
mod notifications;
mod search;
mod store;
mod validation;

pub use ingest::*;
pub use library::*;
pub use notifications::*;
pub use search::*;
pub use store::*;
pub use validation::*;

use crate::api::SearchResultSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Proof that a request was admitted by a [`RequestTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    sequence: u64,
}

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// At-most-one-in-flight state machine for a single operation.
///
/// `Idle -> InFlight -> {Succeeded, Failed} -> Idle`. Every admitted request
/// gets a fresh sequence number; completions carrying anything but the latest
/// one are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestTracker {
    state: RequestState,
    issued: u64,
    last_outcome: Option<RequestState>,
}

impl RequestTracker {
    #[cfg(test)]
    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == RequestState::InFlight
    }

    /// `Succeeded` or `Failed` for the most recent settled request.
    pub fn last_outcome(&self) -> Option<RequestState> {
        self.last_outcome
    }

    pub fn try_begin(&mut self) -> Option<RequestTicket> {
        match self.state {
            RequestState::InFlight => None,
            RequestState::Idle | RequestState::Succeeded | RequestState::Failed => {
                self.issued += 1;
                self.state = RequestState::InFlight;
                Some(RequestTicket {
                    sequence: self.issued,
                })
            }
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.is_in_flight() && ticket.sequence == self.issued
    }

    /// Record the outcome of `ticket`. Returns `false` and leaves the tracker
    /// untouched when the ticket is not the latest one in flight.
    pub fn complete(&mut self, ticket: RequestTicket, succeeded: bool) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = if succeeded {
            RequestState::Succeeded
        } else {
            RequestState::Failed
        };
        self.last_outcome = Some(self.state);
        true
    }

    pub fn settle(&mut self) {
        if matches!(self.state, RequestState::Succeeded | RequestState::Failed) {
            self.state = RequestState::Idle;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VibeState {
    library: LibraryState,
    results: Option<SearchResultSet>,
    library_load: RequestTracker,
    ingest: RequestTracker,
    search: RequestTracker,
    notifications: NotificationQueue,
}

impl VibeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn library(&self) -> &LibraryState {
        &self.library
    }

    /// `None` until the first successful search.
    pub fn results(&self) -> Option<&SearchResultSet> {
        self.results.as_ref()
    }

    #[cfg(test)]
    pub fn library_load_state(&self) -> &RequestTracker {
        &self.library_load
    }

    #[cfg(test)]
    pub fn ingest_state(&self) -> &RequestTracker {
        &self.ingest
    }

    #[cfg(test)]
    pub fn search_state(&self) -> &RequestTracker {
        &self.search
    }

    pub fn is_ingesting(&self) -> bool {
        self.ingest.is_in_flight()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_in_flight()
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.items()
    }

    pub fn dismiss_notification(&mut self, id: u64) -> bool {
        self.notifications.dismiss(id)
    }

    fn notify(&mut self, kind: NotificationKind, description: impl Into<String>) -> u64 {
        self.notifications.push(kind, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_admits_one_request_at_a_time() {
        let mut tracker = RequestTracker::default();
        let first = tracker.try_begin().expect("idle tracker admits");
        assert_eq!(tracker.state(), RequestState::InFlight);
        assert!(tracker.try_begin().is_none());

        assert!(tracker.complete(first, true));
        assert_eq!(tracker.state(), RequestState::Succeeded);
        tracker.settle();
        assert_eq!(tracker.state(), RequestState::Idle);
        assert_eq!(tracker.last_outcome(), Some(RequestState::Succeeded));

        let second = tracker.try_begin().expect("settled tracker admits");
        assert!(second.sequence() > first.sequence());
    }

    #[test]
    fn tracker_drops_stale_completions() {
        let mut tracker = RequestTracker::default();
        let first = tracker.try_begin().unwrap();
        assert!(tracker.complete(first, false));
        tracker.settle();

        let second = tracker.try_begin().unwrap();
        assert!(!tracker.complete(first, true));
        assert_eq!(tracker.state(), RequestState::InFlight);
        assert!(tracker.complete(second, true));
        assert!(!tracker.complete(second, true));
    }

    #[test]
    fn fresh_state_is_idle_and_empty() {
        let state = VibeState::new();
        assert!(!state.is_ingesting());
        assert!(!state.is_searching());
        assert!(state.results().is_none());
        assert!(state.library().is_empty());
        assert!(state.notifications().is_empty());
    }
}
