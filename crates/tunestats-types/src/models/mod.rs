//! Backend response models.
//!
//! These mirror the JSON contract of the stats backend. They are passed
//! through to the views untouched.

mod analytics;
mod spotify;
mod time_range;
mod tracking;

pub use analytics::{
    Analytics, ArtistDiscovery, DailyListening, HourlyDistribution, ListeningStreak,
    ListeningTrend, MonthlyComparison, WeekdayDistribution,
};
pub use spotify::{
    ExternalUrls, Followers, PlayHistoryItem, RecentlyPlayedResponse, SpotifyAlbum,
    SpotifyAlbumSimple, SpotifyArtist, SpotifyArtistSimple, SpotifyImage, SpotifyTrack,
    SpotifyUser, TopAlbumsResponse, TopArtistsResponse, TopTracksResponse,
};
pub use time_range::TimeRange;
pub use tracking::{
    AlbumPlayCount, ArtistPlayCount, ListeningSession, TrackPlayCount, TrackingHistory,
    TrackingStats,
};
