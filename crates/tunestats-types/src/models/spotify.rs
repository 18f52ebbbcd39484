//! Music-service objects as relayed by the backend.

use serde::{Deserialize, Serialize};

/// Cover or avatar image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpotifyImage {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

/// Link to the object on the music service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

/// Follower count wrapper.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

/// Signed-in user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpotifyUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
    /// Subscription level ("premium", "free")
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

impl SpotifyUser {
    /// Display name, falling back to the account id.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

/// Full artist object from the top-artists list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpotifyArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
    #[serde(default)]
    pub followers: Option<Followers>,
}

/// Artist reference embedded in tracks and albums.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpotifyArtistSimple {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

/// Album reference embedded in tracks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpotifyAlbumSimple {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpotifyTrack {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    #[serde(default)]
    pub popularity: Option<u32>,
    pub album: SpotifyAlbumSimple,
    pub artists: Vec<SpotifyArtistSimple>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl SpotifyTrack {
    /// Artist names joined the way track rows show them.
    pub fn artist_names(&self) -> String {
        join_artists(&self.artists)
    }
}

/// Album aggregated by the backend from the user's top tracks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpotifyAlbum {
    pub id: String,
    pub name: String,
    pub artists: Vec<SpotifyArtistSimple>,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub total_tracks: Option<u32>,
    /// How many of the user's top tracks come from this album
    #[serde(default)]
    pub track_count_in_top: u32,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

impl SpotifyAlbum {
    pub fn artist_names(&self) -> String {
        join_artists(&self.artists)
    }

    /// Release year, when the date is present.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(|d| d.get(..4))
    }
}

fn join_artists(artists: &[SpotifyArtistSimple]) -> String {
    artists.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopArtistsResponse {
    pub items: Vec<SpotifyArtist>,
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
    pub time_range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopTracksResponse {
    pub items: Vec<SpotifyTrack>,
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
    pub time_range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopAlbumsResponse {
    pub items: Vec<SpotifyAlbum>,
    pub total: u32,
    pub limit: u32,
    pub time_range: String,
}

/// One play event: a track and when it was played.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayHistoryItem {
    pub track: SpotifyTrack,
    /// ISO-8601 timestamp of the play
    pub played_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayHistoryItem>,
    pub total: u32,
}
