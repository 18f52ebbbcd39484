//! Aggregated analytics and monthly summaries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyListening {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub plays: u32,
    pub time_ms: u64,
    pub time_formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlyDistribution {
    /// Hour of day, 0-23
    pub hour: u8,
    pub plays: u32,
    pub time_ms: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekdayDistribution {
    pub day: String,
    pub day_number: u8,
    pub plays: u32,
    pub time_ms: u64,
    pub percentage: f64,
}

/// Consecutive listening days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ListeningStreak {
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(default)]
    pub last_listen_date: Option<String>,
}

/// Listening time compared with the previous period of equal length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListeningTrend {
    pub current_period_ms: u64,
    pub previous_period_ms: u64,
    pub change_percentage: f64,
    /// "up", "down" or "stable"
    pub trend: String,
}

/// Artist first heard inside the analysed window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistDiscovery {
    pub artist_name: String,
    pub first_listen: String,
    pub total_plays: u32,
    pub total_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analytics {
    #[serde(default)]
    pub daily_listening: Vec<DailyListening>,
    #[serde(default)]
    pub hourly_distribution: Vec<HourlyDistribution>,
    #[serde(default)]
    pub weekday_distribution: Vec<WeekdayDistribution>,
    pub streak: ListeningStreak,
    pub trend: ListeningTrend,
    #[serde(default)]
    pub new_artists: Vec<ArtistDiscovery>,
    pub new_tracks_count: u32,
    pub most_played_hour: u8,
    pub most_played_day: String,
    pub average_track_length_ms: u64,
    /// Percentage, 0-100
    pub listening_variety_score: f64,
}

impl Analytics {
    /// The analytics view shows a placeholder instead of charts when nothing
    /// was recorded in the window.
    pub fn is_empty(&self) -> bool {
        self.daily_listening.is_empty()
    }

    /// Sum of daily listening time.
    pub fn total_time_ms(&self) -> u64 {
        self.daily_listening.iter().map(|d| d.time_ms).sum()
    }
}

/// Per-month summary row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyComparison {
    pub month: String,
    pub total_plays: u64,
    pub total_time_ms: u64,
    pub total_time_formatted: String,
    pub unique_artists: u64,
    pub unique_tracks: u64,
    #[serde(default)]
    pub top_artist: Option<String>,
    #[serde(default)]
    pub top_track: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_analytics() {
        let json = r#"{
            "streak": {"current_streak": 0, "longest_streak": 4, "last_listen_date": null},
            "trend": {"current_period_ms": 0, "previous_period_ms": 60000,
                      "change_percentage": -100.0, "trend": "down"},
            "new_tracks_count": 0, "most_played_hour": 21, "most_played_day": "Piątek",
            "average_track_length_ms": 0, "listening_variety_score": 0.0
        }"#;
        let analytics: Analytics = serde_json::from_str(json).unwrap();
        assert!(analytics.is_empty());
        assert_eq!(analytics.total_time_ms(), 0);
        assert_eq!(analytics.streak.longest_streak, 4);
    }

    #[test]
    fn test_total_time_sums_days() {
        let json = r#"{
            "daily_listening": [
                {"date": "2024-03-01", "plays": 3, "time_ms": 600000, "time_formatted": "10m"},
                {"date": "2024-03-02", "plays": 1, "time_ms": 180000, "time_formatted": "3m"}
            ],
            "streak": {"current_streak": 2, "longest_streak": 2},
            "trend": {"current_period_ms": 780000, "previous_period_ms": 0,
                      "change_percentage": 100.0, "trend": "up"},
            "new_tracks_count": 4, "most_played_hour": 8, "most_played_day": "Sobota",
            "average_track_length_ms": 195000, "listening_variety_score": 62.5
        }"#;
        let analytics: Analytics = serde_json::from_str(json).unwrap();
        assert!(!analytics.is_empty());
        assert_eq!(analytics.total_time_ms(), 780000);
        assert_eq!(analytics.listening_variety_score, 62.5);
    }
}
