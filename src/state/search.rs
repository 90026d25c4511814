use super::{
    validation, NotificationKind, RequestTicket, ValidationError, VibeState, SEARCH_FAILED_MESSAGE,
};
use crate::api::{ApiError, SearchResultSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    ticket: RequestTicket,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStart {
    Dispatch(PendingSearch),
    Invalid(ValidationError),
    Ignored,
}

impl VibeState {
    pub fn begin_search(&mut self, raw_query: &str) -> SearchStart {
        let query = match validation::vibe_query(raw_query) {
            Ok(query) => query,
            Err(err) => {
                tracing::debug!("search rejected: {err}");
                self.notify(err.notification_kind(), err.to_string());
                return SearchStart::Invalid(err);
            }
        };

        let Some(ticket) = self.search.try_begin() else {
            tracing::debug!(%query, "search already in flight, ignoring submit");
            return SearchStart::Ignored;
        };

        tracing::info!(%query, sequence = ticket.sequence(), "starting vibe search");
        SearchStart::Dispatch(PendingSearch { ticket, query })
    }

    /// Settle a search. Success swaps the whole result set; failure leaves the
    /// results on screen untouched.
    pub fn finish_search(
        &mut self,
        pending: PendingSearch,
        result: Result<SearchResultSet, ApiError>,
    ) {
        if !self.search.complete(pending.ticket, result.is_ok()) {
            tracing::debug!(
                query = %pending.query,
                sequence = pending.ticket.sequence(),
                "dropping out-of-date search response"
            );
            return;
        }

        match result {
            Ok(results) => {
                let count = results.len();
                tracing::info!(query = %pending.query, count, "vibe search complete");
                self.results = Some(results);
                self.search.settle();
                self.notify(
                    NotificationKind::VibeMatched,
                    format!("Found {count} songs for you."),
                );
            }
            Err(err) => {
                tracing::error!(
                    query = %pending.query,
                    transport = err.is_transport(),
                    error = %err,
                    "vibe search failed"
                );
                self.search.settle();
                self.notify(NotificationKind::SearchFailed, SEARCH_FAILED_MESSAGE);
            }
        }
    }
}
