use serde::{Deserialize, Serialize};

/// One ingested playlist as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaylistRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// One ranked search hit. `score` is a distance, lower is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SongMatch {
    pub name: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub score: f64,
}

impl SongMatch {
    /// Display percentage derived from the distance score.
    ///
    /// Not clamped: scores outside `[0, 10]` produce values outside `[0, 100]`.
    /// Halves round toward positive infinity.
    pub fn match_percent(&self) -> i64 {
        (100.0 - self.score * 10.0 + 0.5).floor() as i64
    }

    pub fn match_percent_clamped(&self) -> i64 {
        self.match_percent().clamp(0, 100)
    }
}

/// Ranked search results, in backend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResultSet {
    #[serde(default)]
    pub songs: Vec<SongMatch>,
    #[serde(default)]
    pub vibe_analysis: Option<String>,
}

impl SearchResultSet {
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestRequest<'a> {
    pub playlist_id: &'a str,
}

/// `POST /ingest` success body. Fields other than `playlists` are informational.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct IngestResponse {
    #[serde(default)]
    pub playlists: Option<Vec<PlaylistRef>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(score: f64) -> SongMatch {
        SongMatch {
            name: "A".to_string(),
            artist: "B".to_string(),
            url: "u".to_string(),
            score,
        }
    }

    #[test]
    fn match_percent_follows_distance_formula() {
        assert_eq!(song(2.5).match_percent(), 75);
        assert_eq!(song(0.0).match_percent(), 100);
        assert_eq!(song(0.44).match_percent(), 96);
    }

    #[test]
    fn match_percent_is_unbounded() {
        assert_eq!(song(-1.0).match_percent(), 110);
        assert_eq!(song(12.0).match_percent(), -20);
        assert_eq!(song(12.0).match_percent_clamped(), 0);
        assert_eq!(song(-1.0).match_percent_clamped(), 100);
    }

    #[test]
    fn negative_halves_round_up() {
        // 100 - 102.5 == -2.5
        assert_eq!(song(10.25).match_percent(), -2);
        assert_eq!(song(7.5).match_percent(), 25);
    }

    #[test]
    fn search_results_keep_backend_order_and_extra_fields() {
        let body = r#"{
            "vibe_analysis": "neon rain",
            "songs": [
                {"name": "Second", "artist": "X", "url": "u2", "score": 3.0},
                {"name": "First", "artist": "Y", "url": "u1", "score": 1.0}
            ]
        }"#;
        let parsed: SearchResultSet = serde_json::from_str(body).unwrap();
        let names: Vec<&str> = parsed.songs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
        assert_eq!(parsed.vibe_analysis.as_deref(), Some("neon rain"));
    }

    #[test]
    fn ingest_response_ignores_unknown_fields() {
        let body = r#"{
            "status": "success",
            "indexed": 42,
            "playlists": [{"id": "p1", "name": "Chill", "url": "https://x", "image": null}]
        }"#;
        let parsed: IngestResponse = serde_json::from_str(body).unwrap();
        let playlists = parsed.playlists.unwrap();
        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].id, "p1");
        assert_eq!(playlists[0].image, None);
    }
}
