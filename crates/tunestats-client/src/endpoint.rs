//! Which backend every API call goes to.
//!
//! Resolution order: a user override persisted in the store, then the
//! build-time `TUNESTATS_API_URL`, then [`FALLBACK_ENDPOINT`].

use std::sync::Arc;

use crate::store::KeyValueStore;
use tunestats_types::Result;

/// Compiled-in backend address.
pub const FALLBACK_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Storage key of the user override.
pub const OVERRIDE_KEY: &str = "spotify_stats_backend_url";

/// Default endpoint without any override: build-time value or the fallback.
pub fn default_endpoint() -> String {
    match option_env!("TUNESTATS_API_URL") {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => FALLBACK_ENDPOINT.to_string(),
    }
}

/// Resolves the backend base URL on every call.
///
/// Cloning shares the same store, so an override saved through one handle
/// is seen by all of them on their next read.
#[derive(Clone)]
pub struct EndpointResolver {
    store: Option<Arc<dyn KeyValueStore>>,
    default: String,
}

impl std::fmt::Debug for EndpointResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointResolver")
            .field("persistent", &self.store.is_some())
            .field("default", &self.default)
            .finish()
    }
}

impl EndpointResolver {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_default(store, default_endpoint())
    }

    pub fn with_default(store: Arc<dyn KeyValueStore>, default: impl Into<String>) -> Self {
        Self { store: Some(store), default: default.into() }
    }

    /// Resolver with no backing store. It always yields the default and
    /// ignores writes.
    pub fn detached() -> Self {
        Self { store: None, default: default_endpoint() }
    }

    /// The base URL to call right now.
    pub fn current_endpoint(&self) -> String {
        match self.read_override() {
            Some(url) if !url.is_empty() => url,
            _ => self.default.clone(),
        }
    }

    /// Persist `url` as the override, dropping one trailing `/`.
    ///
    /// The value is not validated; a bad URL shows up as failed requests.
    pub fn set_override(&self, url: &str) -> Result<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        let clean = url.strip_suffix('/').unwrap_or(url);
        store.set(OVERRIDE_KEY, clean)?;
        tracing::info!("Backend override set to {}", clean);
        Ok(())
    }

    /// Forget the override and go back to the default chain.
    pub fn clear_override(&self) -> Result<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        store.remove(OVERRIDE_KEY)?;
        tracing::info!("Backend override cleared");
        Ok(())
    }

    /// Whether an override value is stored, even an empty one.
    pub fn is_overridden(&self) -> bool {
        self.read_override().is_some()
    }

    /// Settings "save": anything other than blank or the compiled fallback
    /// becomes the override, otherwise the override is cleared. Surrounding
    /// whitespace is trimmed before either check.
    pub fn save(&self, url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() || url == FALLBACK_ENDPOINT {
            self.clear_override()
        } else {
            self.set_override(url)
        }
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    fn read_override(&self) -> Option<String> {
        let store = self.store.as_ref()?;
        match store.get(OVERRIDE_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Could not read backend override, using default: {}", e);
                None
            }
        }
    }
}
