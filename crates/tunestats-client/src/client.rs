use crate::endpoint::EndpointResolver;
use crate::error::ClientError;
use crate::session::SessionStore;
use crate::types::*;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tunestats_types::models::{
    Analytics, MonthlyComparison, RecentlyPlayedResponse, SpotifyUser, TimeRange,
    TopAlbumsResponse, TopArtistsResponse, TopTracksResponse, TrackingHistory, TrackingStats,
};
use url::Url;

/// HTTP client for the stats backend.
///
/// The base URL is resolved on every request, so an override saved while
/// the client is alive applies to the very next call. Failed requests are
/// never retried.
pub struct StatsClient {
    client: Client,
    config: ClientConfig,
    resolver: EndpointResolver,
    session: SessionStore,
}

impl StatsClient {
    pub fn new(
        config: ClientConfig,
        resolver: EndpointResolver,
        session: SessionStore,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config, resolver, session })
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Where to send the user to start the OAuth flow.
    pub fn login_url(&self) -> String {
        format!("{}/api/auth/login", self.resolver.current_endpoint())
    }

    pub async fn current_user(&self) -> Result<SpotifyUser, ClientError> {
        self.get_json("/api/spotify/me", &[]).await
    }

    pub async fn top_artists(
        &self,
        range: TimeRange,
        limit: u32,
    ) -> Result<TopArtistsResponse, ClientError> {
        self.get_json("/api/spotify/top/artists", &top_query(range, limit)).await
    }

    pub async fn top_tracks(
        &self,
        range: TimeRange,
        limit: u32,
    ) -> Result<TopTracksResponse, ClientError> {
        self.get_json("/api/spotify/top/tracks", &top_query(range, limit)).await
    }

    pub async fn top_albums(
        &self,
        range: TimeRange,
        limit: u32,
    ) -> Result<TopAlbumsResponse, ClientError> {
        self.get_json("/api/spotify/top/albums", &top_query(range, limit)).await
    }

    pub async fn recently_played(&self, limit: u32) -> Result<RecentlyPlayedResponse, ClientError> {
        self.get_json("/api/spotify/recently-played", &[("limit", limit.to_string())]).await
    }

    /// Aggregates over the last `days` days (0 = all time).
    pub async fn tracking_stats(&self, days: u32) -> Result<TrackingStats, ClientError> {
        self.get_json("/api/tracking/stats", &[("days", days.to_string())]).await
    }

    pub async fn tracking_history(
        &self,
        days: u32,
        limit: u32,
        offset: u32,
    ) -> Result<TrackingHistory, ClientError> {
        let query = [
            ("days", days.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        self.get_json("/api/tracking/history", &query).await
    }

    pub async fn analytics(&self, days: u32) -> Result<Analytics, ClientError> {
        self.get_json("/api/tracking/analytics", &[("days", days.to_string())]).await
    }

    pub async fn monthly(&self, months: u32) -> Result<Vec<MonthlyComparison>, ClientError> {
        self.get_json("/api/tracking/monthly", &[("months", months.to_string())]).await
    }

    /// Analytics and monthly summaries, requested concurrently.
    pub async fn analytics_overview(&self, days: u32, months: u32) -> AnalyticsOverview {
        let (analytics, monthly) = tokio::join!(self.analytics(days), self.monthly(months));
        AnalyticsOverview { analytics, monthly }
    }

    /// Probe `base_url` with a plain `GET <base_url>/`.
    ///
    /// Pass the currently typed URL, not necessarily the saved one, so a
    /// candidate can be checked before it is stored.
    pub async fn check_connectivity(&self, base_url: &str) -> ConnectionStatus {
        let root = match Url::parse(&format!("{}/", base_url.trim_end_matches('/'))) {
            Ok(url) => url,
            Err(e) => return ConnectionStatus::Unreachable(format!("Invalid URL: {}", e)),
        };
        tracing::debug!("Probing backend at {}", root);

        let result = self
            .client
            .get(root)
            .timeout(Duration::from_secs(self.config.probe_timeout_secs))
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => ConnectionStatus::Reachable,
            Ok(resp) => {
                ConnectionStatus::Unreachable(format!("Backend answered {}", resp.status()))
            }
            Err(e) => ConnectionStatus::Unreachable(e.to_string()),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let token = self.session.access_token()?.ok_or(ClientError::NotSignedIn)?;
        let url = format!("{}{}", self.resolver.current_endpoint(), path);
        tracing::debug!("GET {} {:?}", url, query);

        let resp = self.client.get(&url).query(query).bearer_auth(token).send().await?;

        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            if let Err(e) = self.session.clear_access_token() {
                tracing::warn!("Failed to clear rejected session token: {}", e);
            }
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::ServerError { status: status.as_u16(), message });
        }

        resp.json().await.map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

fn top_query(range: TimeRange, limit: u32) -> [(&'static str, String); 2] {
    [("time_range", range.as_str().to_string()), ("limit", limit.to_string())]
}
