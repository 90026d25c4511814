//! User-facing notification events. Rendering them is the view's job.

/// Oldest notifications are dropped beyond this many.
const MAX_VISIBLE: usize = 8;

pub const SYNC_FAILED_FALLBACK: &str = "Failed to sync";
pub const SEARCH_FAILED_MESSAGE: &str = "Could not find matches.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    MissingPlaylistId,
    SyncStarted,
    SyncComplete,
    SyncFailed,
    EmptyVibe,
    VibeMatched,
    SearchFailed,
}

impl NotificationKind {
    pub fn level(self) -> NotificationLevel {
        match self {
            Self::SyncStarted => NotificationLevel::Info,
            Self::SyncComplete | Self::VibeMatched => NotificationLevel::Success,
            Self::EmptyVibe => NotificationLevel::Warning,
            Self::MissingPlaylistId | Self::SyncFailed | Self::SearchFailed => {
                NotificationLevel::Error
            }
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::MissingPlaylistId => "Missing ID",
            Self::SyncStarted => "Syncing Playlist...",
            Self::SyncComplete => "Sync Complete!",
            Self::SyncFailed => "Sync Failed",
            Self::EmptyVibe => "Empty Vibe",
            Self::VibeMatched => "Vibe Matched",
            Self::SearchFailed => "Search Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, description: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            level: kind.level(),
            title: kind.title().to_string(),
            description: description.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}
