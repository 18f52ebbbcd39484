//! Persisted sign-in session.
//!
//! The backend's OAuth callback redirects with `access_token` and
//! `refresh_token` query parameters. Those are stored until sign-out or
//! until the backend answers 401.

use std::sync::Arc;
use url::Url;

use crate::store::KeyValueStore;
use tunestats_types::{ConfigError, Result};

pub const ACCESS_TOKEN_KEY: &str = "spotify_access_token";
pub const REFRESH_TOKEN_KEY: &str = "spotify_refresh_token";

#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Pull tokens out of a post-login redirect URL and persist them.
    ///
    /// Returns the access token, or `None` when the URL carries none (in
    /// which case nothing is written).
    pub fn accept_redirect(&self, redirect: &str) -> Result<Option<String>> {
        let url = Url::parse(redirect).map_err(|e| ConfigError::ParseError {
            message: format!("redirect URL: {}", e),
        })?;

        let mut access = None;
        let mut refresh = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "access_token" if !value.is_empty() => access = Some(value.into_owned()),
                "refresh_token" if !value.is_empty() => refresh = Some(value.into_owned()),
                _ => {},
            }
        }

        let Some(access) = access else {
            return Ok(None);
        };
        self.store_token(&access, refresh.as_deref())?;
        Ok(Some(access))
    }

    /// Persist a token. A missing refresh token leaves the stored one alone.
    pub fn store_token(&self, access: &str, refresh: Option<&str>) -> Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, access)?;
        if let Some(refresh) = refresh {
            self.store.set(REFRESH_TOKEN_KEY, refresh)?;
        }
        tracing::debug!("Session token stored");
        Ok(())
    }

    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self.store.get(ACCESS_TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    pub fn refresh_token(&self) -> Result<Option<String>> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    /// Drop the access token only; used when the backend rejects it.
    pub fn clear_access_token(&self) -> Result<()> {
        self.store.remove(ACCESS_TOKEN_KEY)
    }

    pub fn sign_out(&self) -> Result<()> {
        self.store.remove(ACCESS_TOKEN_KEY)?;
        self.store.remove(REFRESH_TOKEN_KEY)?;
        tracing::info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn session() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_accept_redirect() {
        let session = session();
        let token = session
            .accept_redirect(
                "http://localhost:3000/dashboard?access_token=abc%2B1&refresh_token=r-9",
            )
            .unwrap();

        assert_eq!(token.as_deref(), Some("abc+1"));
        assert_eq!(session.access_token().unwrap().as_deref(), Some("abc+1"));
        assert_eq!(session.refresh_token().unwrap().as_deref(), Some("r-9"));
    }

    #[test]
    fn test_redirect_without_token_writes_nothing() {
        let session = session();
        session.store_token("old", None).unwrap();

        let token =
            session.accept_redirect("http://localhost:3000/dashboard?error=denied").unwrap();
        assert!(token.is_none());
        assert_eq!(session.access_token().unwrap().as_deref(), Some("old"));
    }

    #[test]
    fn test_redirect_must_be_a_url() {
        assert!(session().accept_redirect("access_token=abc").is_err());
    }

    #[test]
    fn test_refresh_token_kept_when_absent() {
        let session = session();
        session.store_token("a1", Some("r1")).unwrap();
        session.store_token("a2", None).unwrap();
        assert_eq!(session.refresh_token().unwrap().as_deref(), Some("r1"));
    }

    #[test]
    fn test_sign_out_and_unauthorized() {
        let session = session();
        session.store_token("a", Some("r")).unwrap();

        session.clear_access_token().unwrap();
        assert!(session.access_token().unwrap().is_none());
        assert!(session.refresh_token().unwrap().is_some());

        session.sign_out().unwrap();
        assert!(session.refresh_token().unwrap().is_none());
    }
}
