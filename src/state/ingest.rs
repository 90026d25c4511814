use super::{
    validation, NotificationKind, RequestTicket, ValidationError, VibeState, SYNC_FAILED_FALLBACK,
};
use crate::api::{ApiError, IngestResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingIngest {
    ticket: RequestTicket,
    pub playlist_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestStart {
    /// Admitted; the caller must send `POST /ingest` and report back.
    Dispatch(PendingIngest),
    /// Rejected locally, a notification was emitted, nothing to send.
    Invalid(ValidationError),
    /// Another ingest is still running.
    Ignored,
}

impl VibeState {
    pub fn begin_ingest(&mut self, raw_input: &str) -> IngestStart {
        let playlist_id = match validation::playlist_id(raw_input) {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!("ingest rejected: {err}");
                self.notify(err.notification_kind(), err.to_string());
                return IngestStart::Invalid(err);
            }
        };

        let Some(ticket) = self.ingest.try_begin() else {
            tracing::debug!(%playlist_id, "ingest already in flight, ignoring submit");
            return IngestStart::Ignored;
        };

        tracing::info!(%playlist_id, sequence = ticket.sequence(), "starting ingest");
        self.notify(
            NotificationKind::SyncStarted,
            "This might take a moment to analyze songs.",
        );
        IngestStart::Dispatch(PendingIngest {
            ticket,
            playlist_id,
        })
    }

    /// Settle an ingest. The notification is emitted only after the tracker is
    /// back to `Idle`.
    ///
    /// Returns `true` when the backend acknowledged the ingest without a
    /// playlist snapshot, in which case the library has to be fetched again.
    pub fn finish_ingest(
        &mut self,
        pending: PendingIngest,
        result: Result<IngestResponse, ApiError>,
    ) -> bool {
        if !self.ingest.complete(pending.ticket, result.is_ok()) {
            tracing::debug!(
                playlist_id = %pending.playlist_id,
                sequence = pending.ticket.sequence(),
                "dropping stale ingest completion"
            );
            return false;
        }

        match result {
            Ok(response) => {
                let needs_reload = match response.playlists {
                    Some(snapshot) => {
                        tracing::info!(
                            playlist_id = %pending.playlist_id,
                            count = snapshot.len(),
                            "ingest complete"
                        );
                        self.replace_library(snapshot);
                        false
                    }
                    None => {
                        tracing::info!(
                            playlist_id = %pending.playlist_id,
                            status = response.status.as_deref().unwrap_or_default(),
                            "ingest complete without snapshot, library will be reloaded"
                        );
                        true
                    }
                };
                self.ingest.settle();
                self.notify(
                    NotificationKind::SyncComplete,
                    "Your songs are now in the AI vector store.",
                );
                needs_reload
            }
            Err(err) => {
                tracing::error!(
                    playlist_id = %pending.playlist_id,
                    transport = err.is_transport(),
                    error = %err,
                    "ingest failed"
                );
                self.ingest.settle();
                self.notify(
                    NotificationKind::SyncFailed,
                    err.user_message(SYNC_FAILED_FALLBACK),
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PlaylistRef;
    use crate::state::{NotificationLevel, RequestState};

    fn playlist(id: &str) -> PlaylistRef {
        PlaylistRef {
            id: id.to_string(),
            name: id.to_uppercase(),
            url: format!("https://open.spotify.com/playlist/{id}"),
            image: Some("https://i.scdn.co/image/x".to_string()),
        }
    }

    fn dispatch(state: &mut VibeState, raw: &str) -> PendingIngest {
        match state.begin_ingest(raw) {
            IngestStart::Dispatch(pending) => pending,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_id_is_rejected_with_notification() {
        let mut state = VibeState::new();
        assert_eq!(
            state.begin_ingest("   "),
            IngestStart::Invalid(ValidationError::EmptyPlaylistId)
        );
        assert_eq!(state.ingest_state().state(), RequestState::Idle);
        let note = state.notifications().last().unwrap();
        assert_eq!(note.kind, NotificationKind::MissingPlaylistId);
        assert_eq!(note.description, "Please enter a Spotify Playlist ID.");
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut state = VibeState::new();
        let _pending = dispatch(&mut state, "abc");
        assert!(state.is_ingesting());
        assert_eq!(state.begin_ingest("abc"), IngestStart::Ignored);
    }

    #[test]
    fn success_replaces_library_with_snapshot() {
        let mut state = VibeState::new();
        state.replace_library(vec![playlist("stale"), playlist("other")]);

        let pending = dispatch(&mut state, "37i9dQZF1");
        assert_eq!(pending.playlist_id, "37i9dQZF1");
        let needs_reload = state.finish_ingest(
            pending,
            Ok(IngestResponse {
                playlists: Some(vec![playlist("fresh")]),
                ..IngestResponse::default()
            }),
        );

        assert!(!needs_reload);
        assert_eq!(state.library().playlists(), &[playlist("fresh")][..]);
        assert_eq!(state.ingest_state().state(), RequestState::Idle);
        assert_eq!(state.ingest_state().last_outcome(), Some(RequestState::Succeeded));

        let kinds: Vec<NotificationKind> = state.notifications().iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![NotificationKind::SyncStarted, NotificationKind::SyncComplete]
        );
    }

    #[test]
    fn success_never_touches_search_results() {
        let mut state = VibeState::new();
        let search = match state.begin_search("rainy cafe") {
            crate::state::SearchStart::Dispatch(pending) => pending,
            other => panic!("expected dispatch, got {other:?}"),
        };
        state.finish_search(
            search,
            Ok(crate::api::SearchResultSet {
                songs: vec![crate::api::SongMatch {
                    name: "Song".to_string(),
                    artist: "Artist".to_string(),
                    url: "u".to_string(),
                    score: 1.0,
                }],
                vibe_analysis: None,
            }),
        );
        let before = state.results().cloned();

        let pending = dispatch(&mut state, "abc");
        state.finish_ingest(
            pending,
            Ok(IngestResponse {
                playlists: Some(vec![playlist("abc")]),
                ..IngestResponse::default()
            }),
        );
        assert_eq!(state.results().cloned(), before);
    }

    #[test]
    fn backend_detail_is_surfaced_verbatim() {
        let mut state = VibeState::new();
        state.replace_library(vec![playlist("kept")]);

        let pending = dispatch(&mut state, "37i9dQZF1");
        let needs_reload = state.finish_ingest(
            pending,
            Err(ApiError::Backend {
                status: 404,
                detail: "not found".to_string(),
            }),
        );

        let note = state.notifications().last().unwrap();
        assert_eq!(note.kind, NotificationKind::SyncFailed);
        assert_eq!(note.level, NotificationLevel::Error);
        assert_eq!(note.description, "not found");
        assert!(!needs_reload);
        assert_eq!(state.library().playlists(), &[playlist("kept")][..]);
        assert_eq!(state.ingest_state().state(), RequestState::Idle);
        assert_eq!(state.ingest_state().last_outcome(), Some(RequestState::Failed));
    }

    #[test]
    fn transport_failure_uses_generic_message() {
        let mut state = VibeState::new();
        let pending = dispatch(&mut state, "abc");
        state.finish_ingest(pending, Err(ApiError::Status { status: 502 }));
        assert_eq!(
            state.notifications().last().unwrap().description,
            SYNC_FAILED_FALLBACK
        );
    }

    #[test]
    fn ingest_can_be_retried_after_failure() {
        let mut state = VibeState::new();
        let pending = dispatch(&mut state, "abc");
        state.finish_ingest(pending, Err(ApiError::Status { status: 500 }));
        assert!(matches!(state.begin_ingest("abc"), IngestStart::Dispatch(_)));
    }

    #[test]
    fn snapshotless_success_keeps_library_and_asks_for_reload() {
        let mut state = VibeState::new();
        state.replace_library(vec![playlist("kept")]);
        let pending = dispatch(&mut state, "abc");
        let needs_reload = state.finish_ingest(
            pending,
            Ok(IngestResponse {
                status: Some("success".to_string()),
                ..IngestResponse::default()
            }),
        );
        assert!(needs_reload);
        assert_eq!(state.library().len(), 1);
        assert_eq!(
            state.notifications().last().unwrap().kind,
            NotificationKind::SyncComplete
        );
    }
}
