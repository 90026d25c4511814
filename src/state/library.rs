use super::{RequestTicket, VibeState};
use crate::api::{ApiError, PlaylistRef};

pub const EMPTY_LIBRARY_MESSAGE: &str =
    "No playlists synced yet. Paste a Spotify playlist ID to get started.";

/// Ingested playlists, always a whole backend snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryState {
    playlists: Vec<PlaylistRef>,
}

impl LibraryState {
    pub fn playlists(&self) -> &[PlaylistRef] {
        &self.playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Overwrite with a fresh snapshot. No merging, no local dedup.
    pub fn replace(&mut self, collection: Vec<PlaylistRef>) {
        self.playlists = collection;
    }
}

/// What the library panel should draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LibraryView<'a> {
    Loading,
    Empty,
    Playlists(&'a [PlaylistRef]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLoad {
    ticket: RequestTicket,
}

impl VibeState {
    /// Start the mount-time library read. `None` if one is already running.
    pub fn begin_library_load(&mut self) -> Option<PendingLoad> {
        let ticket = self.library_load.try_begin()?;
        tracing::debug!(sequence = ticket.sequence(), "loading playlist library");
        Some(PendingLoad { ticket })
    }

    /// Apply the library read. Failures keep the previous collection and are
    /// only logged. A `replace_library` that landed while this read was in
    /// flight is overwritten: whichever resolves last is shown.
    pub fn finish_library_load(
        &mut self,
        pending: PendingLoad,
        result: Result<Vec<PlaylistRef>, ApiError>,
    ) {
        if !self.library_load.complete(pending.ticket, result.is_ok()) {
            tracing::debug!(
                sequence = pending.ticket.sequence(),
                "dropping stale library load"
            );
            return;
        }

        match result {
            Ok(collection) => {
                tracing::info!(count = collection.len(), "library loaded");
                self.library.replace(collection);
            }
            Err(err) => {
                tracing::warn!(error = %err, "library load failed, keeping previous collection");
            }
        }
        self.library_load.settle();
    }

    pub fn replace_library(&mut self, collection: Vec<PlaylistRef>) {
        self.library.replace(collection);
    }

    pub fn library_view(&self) -> LibraryView<'_> {
        if self.library.is_empty() {
            let never_settled = self.library_load.last_outcome().is_none();
            if self.library_load.is_in_flight() && never_settled {
                return LibraryView::Loading;
            }
            return LibraryView::Empty;
        }
        LibraryView::Playlists(self.library.playlists())
    }
}
