use super::NotificationKind;

/// Input rejected before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a Spotify Playlist ID.")]
    EmptyPlaylistId,
    #[error("Describe a setting or upload a photo first.")]
    EmptyQuery,
}

impl ValidationError {
    pub fn notification_kind(self) -> NotificationKind {
        match self {
            Self::EmptyPlaylistId => NotificationKind::MissingPlaylistId,
            Self::EmptyQuery => NotificationKind::EmptyVibe,
        }
    }
}

/// Accepts a bare id, a `spotify:playlist:<id>` URI or an
/// `open.spotify.com/playlist/<id>` link.
pub fn playlist_id(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let id = if let Some(rest) = trimmed.strip_prefix("spotify:playlist:") {
        rest
    } else if let Some((_, tail)) = trimmed.split_once("/playlist/") {
        let end = tail.find(['?', '#', '/']).unwrap_or(tail.len());
        &tail[..end]
    } else {
        trimmed
    };

    let id = id.trim();
    if id.is_empty() {
        return Err(ValidationError::EmptyPlaylistId);
    }
    Ok(id.to_string())
}

pub fn vibe_query(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }
    Ok(trimmed.to_string())
}
