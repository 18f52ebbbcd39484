use crate::error::ClientError;
use tunestats_types::{Analytics, MonthlyComparison};

/// Configuration for the stats client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Timeout for the connectivity probe in seconds.
    pub probe_timeout_secs: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            probe_timeout_secs: 5,
            user_agent: format!("tunestats/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Outcome of a "test connection" probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Root path answered with a success status.
    Reachable,
    /// Anything else, with a human-readable reason.
    Unreachable(String),
}

impl ConnectionStatus {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable)
    }
}

/// Both requests behind the analytics view, fetched together.
///
/// Each half fails independently; a missing monthly summary does not hide
/// the analytics.
#[derive(Debug)]
pub struct AnalyticsOverview {
    pub analytics: Result<Analytics, ClientError>,
    pub monthly: Result<Vec<MonthlyComparison>, ClientError>,
}
