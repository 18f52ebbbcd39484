//! Listening history recorded by the backend itself.

use serde::{Deserialize, Serialize};

/// Track with aggregated play count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackPlayCount {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    pub play_count: u32,
    pub total_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistPlayCount {
    pub artist_name: String,
    pub play_count: u32,
    pub total_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumPlayCount {
    pub album_name: String,
    pub artist_name: String,
    pub play_count: u32,
    pub total_time_ms: u64,
}

/// Aggregates over a `period_days` window (0 means all time).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingStats {
    pub period_days: u32,
    pub total_plays: u64,
    pub total_time_ms: u64,
    pub total_time_formatted: String,
    pub unique_tracks: u64,
    pub unique_artists: u64,
    pub unique_albums: u64,
    pub average_daily_time_ms: u64,
    pub average_daily_time_formatted: String,
    #[serde(default)]
    pub top_tracks: Vec<TrackPlayCount>,
    #[serde(default)]
    pub top_artists: Vec<ArtistPlayCount>,
    #[serde(default)]
    pub top_albums: Vec<AlbumPlayCount>,
}

/// One recorded play.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListeningSession {
    pub id: i64,
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    pub duration_ms: u64,
    pub played_at: String,
}

/// Page of recorded plays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingHistory {
    pub items: Vec<ListeningSession>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

impl TrackingHistory {
    /// Whether another page exists after this one.
    pub fn has_more(&self) -> bool {
        u64::from(self.offset) + (self.items.len() as u64) < self.total
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_history_paging() {
        let json = r#"{
            "items": [{
                "id": 1, "track_id": "t", "track_name": "Song", "artist_name": "Band",
                "album_name": "Record", "duration_ms": 200000,
                "played_at": "2024-03-01T12:00:00Z"
            }],
            "total": 3, "limit": 1, "offset": 0
        }"#;
        let mut page: TrackingHistory = serde_json::from_str(json).unwrap();
        assert!(page.has_more());

        page.offset = 2;
        assert!(!page.has_more());
    }

    #[test]
    fn test_stats_without_top_lists() {
        let json = r#"{
            "period_days": 30, "total_plays": 0, "total_time_ms": 0,
            "total_time_formatted": "0m", "unique_tracks": 0, "unique_artists": 0,
            "unique_albums": 0, "average_daily_time_ms": 0,
            "average_daily_time_formatted": "0m"
        }"#;
        let stats: TrackingStats = serde_json::from_str(json).unwrap();
        assert!(stats.top_tracks.is_empty());
    }
}
