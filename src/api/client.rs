use crate::api::error::{ApiError, Result};
use crate::api::models::*;
use crate::config::AppConfig;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// The three backend calls the view layer depends on.
///
/// Futures are `?Send` because the browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait VibeBackend {
    /// `GET /playlists`
    async fn list_playlists(&self) -> Result<Vec<PlaylistRef>>;

    /// `POST /ingest` with `{ "playlist_id": .. }`
    async fn ingest(&self, playlist_id: &str) -> Result<IngestResponse>;

    /// `POST /search` as multipart with a single `text` field.
    async fn search(&self, text: &str) -> Result<SearchResultSet>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChromaTuneClient {
    base_url: String,
}

impl ChromaTuneClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(ApiError::from_error_body(status.as_u16(), &body));
    }
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait(?Send)]
impl VibeBackend for ChromaTuneClient {
    async fn list_playlists(&self) -> Result<Vec<PlaylistRef>> {
        let url = self.endpoint("playlists");
        tracing::debug!(%url, "listing playlists");
        let response = HTTP_CLIENT.get(&url).send().await?;
        read_json(response).await
    }

    async fn ingest(&self, playlist_id: &str) -> Result<IngestResponse> {
        let url = self.endpoint("ingest");
        tracing::debug!(%url, playlist_id, "submitting ingest");
        let response = HTTP_CLIENT
            .post(&url)
            .json(&IngestRequest { playlist_id })
            .send()
            .await?;
        read_json(response).await
    }

    async fn search(&self, text: &str) -> Result<SearchResultSet> {
        let url = self.endpoint("search");
        tracing::debug!(%url, text, "submitting vibe search");
        // Multipart leaves room for an image part next to `text`.
        let form = reqwest::multipart::Form::new().text("text", text.to_string());
        let response = HTTP_CLIENT.post(&url).multipart(form).send().await?;
        read_json(response).await
    }
}
