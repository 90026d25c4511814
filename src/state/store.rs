use super::{IngestStart, SearchStart, ValidationError, VibeState};
use crate::api::VibeBackend;
use crate::diagnostics::{log_perf, PerfTimer};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Where the page keeps its [`VibeState`].
///
/// `update` must not be held across an `.await`; the drivers below only call it
/// synchronously on either side of the network call.
pub trait ViewStore {
    fn update<R>(&self, f: impl FnOnce(&mut VibeState) -> R) -> R;
}

impl ViewStore for Signal<VibeState> {
    fn update<R>(&self, f: impl FnOnce(&mut VibeState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut *state)
    }
}

impl ViewStore for Rc<RefCell<VibeState>> {
    fn update<R>(&self, f: impl FnOnce(&mut VibeState) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

/// How a submit call ended from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The request went out and the backend accepted it.
    Succeeded,
    /// The request went out and failed; the user was notified.
    Failed,
    /// Rejected before any request.
    Invalid(ValidationError),
    /// Dropped because the same operation was already in flight.
    Ignored,
}

pub async fn load_library<S, B>(store: &S, backend: &B)
where
    S: ViewStore,
    B: VibeBackend + ?Sized,
{
    let Some(pending) = store.update(|state| state.begin_library_load()) else {
        return;
    };
    let started = PerfTimer::now();
    let result = backend.list_playlists().await;
    log_perf("library.load", started, "");
    store.update(|state| state.finish_library_load(pending, result));
}

pub async fn submit_ingest<S, B>(store: &S, backend: &B, raw_input: &str) -> Submission
where
    S: ViewStore,
    B: VibeBackend + ?Sized,
{
    let pending = match store.update(|state| state.begin_ingest(raw_input)) {
        IngestStart::Dispatch(pending) => pending,
        IngestStart::Invalid(err) => return Submission::Invalid(err),
        IngestStart::Ignored => return Submission::Ignored,
    };
    let started = PerfTimer::now();
    let result = backend.ingest(&pending.playlist_id).await;
    log_perf(
        "ingest",
        started,
        &format!("playlist_id={}", pending.playlist_id),
    );
    let outcome = settled(result.is_ok());
    if store.update(|state| state.finish_ingest(pending, result)) {
        load_library(store, backend).await;
    }
    outcome
}

pub async fn submit_search<S, B>(store: &S, backend: &B, raw_query: &str) -> Submission
where
    S: ViewStore,
    B: VibeBackend + ?Sized,
{
    let pending = match store.update(|state| state.begin_search(raw_query)) {
        SearchStart::Dispatch(pending) => pending,
        SearchStart::Invalid(err) => return Submission::Invalid(err),
        SearchStart::Ignored => return Submission::Ignored,
    };
    let started = PerfTimer::now();
    let result = backend.search(&pending.query).await;
    log_perf("search", started, &format!("query={}", pending.query));
    let outcome = settled(result.is_ok());
    store.update(|state| state.finish_search(pending, result));
    outcome
}

fn settled(succeeded: bool) -> Submission {
    if succeeded {
        Submission::Succeeded
    } else {
        Submission::Failed
    }
}
