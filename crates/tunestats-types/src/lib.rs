//! # Tunestats Types
//!
//! Wire models, error definitions and the time formatter for Tunestats.
//!
//! - **`error`** - Typed errors for configuration storage and timestamp parsing
//! - **`models`** - Backend response shapes (top lists, play history, analytics)
//! - **`format`** - Duration and relative-time rendering with pluggable locales
//!
//! ## Architecture Role
//!
//! `tunestats-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          tunestats-types (this crate)
//!                  │
//!                  ▼
//!          tunestats-client
//!                  │
//!                  ▼
//!            tunestats-cli
//! ```
//!
//! Models are passed through as the backend sends them. Nothing here
//! validates or mutates them.

pub mod error;
pub mod format;
pub mod models;

pub use error::{ConfigError, Result, TimestampError};

pub use format::{
    capitalize, format_duration, format_duration_long, format_relative_time,
    format_relative_time_since, English, Locale, PluralCategory, Polish,
};

pub use models::{
    Analytics, MonthlyComparison, PlayHistoryItem, RecentlyPlayedResponse, SpotifyUser,
    TimeRange, TopAlbumsResponse, TopArtistsResponse, TopTracksResponse, TrackingHistory,
    TrackingStats,
};
