use super::refresher::{self, RefreshHandle};
use crate::transport::HttpTransport;
use crate::{Error, Result};
use arc_swap::ArcSwap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Header carrying the subscription key on token requests.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// How long an issued token is accepted by the service.
pub const TOKEN_VALIDITY: Duration = Duration::from_secs(10 * 60);

/// Background refresh cadence; one full cycle of margin under [`TOKEN_VALIDITY`].
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(9 * 60);

/// Fixed per-request timeout for token issuance.
pub const TOKEN_REFRESH_TIMEOUT: Duration = Duration::from_secs(15);

/// Owns the subscription key and the current bearer token.
///
/// Readers take an immutable snapshot of the token with [`TokenManager::current`]; a
/// successful refresh swaps in a new snapshot atomically, so a synthesis call never
/// observes a torn value. Refreshes are serialized, which keeps a single writer even
/// when a manual refresh overlaps the background loop.
pub struct TokenManager {
    subscription_key: String,
    token_url: Url,
    transport: HttpTransport,
    token: ArcSwap<String>,
    refresh_lock: tokio::sync::Mutex<()>,
}

impl TokenManager {
    /// Create a manager with no token yet; call [`TokenManager::refresh`] before use.
    pub fn new(subscription_key: impl Into<String>, token_url: Url, transport: HttpTransport) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            token_url,
            transport,
            token: ArcSwap::from_pointee(String::new()),
            refresh_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Snapshot of the current token. Empty until the first successful refresh.
    pub fn current(&self) -> Arc<String> {
        self.token.load_full()
    }

    pub fn has_token(&self) -> bool {
        !self.token.load().is_empty()
    }

    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    /// Fetch a new token and replace the stored one.
    ///
    /// On any failure the previous token stays in place: a stale token that may still be
    /// inside its validity window beats having none.
    pub async fn refresh(&self) -> Result<()> {
        let _guard = self.refresh_lock.lock().await;

        let request = self
            .transport
            .post(&self.token_url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key)
            .body("")
            .timeout(TOKEN_REFRESH_TIMEOUT);

        let response = request.send().await.map_err(|e| Error::TokenRefresh {
            status: None,
            message: format!("failed to fetch token, {}", e),
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::TokenRefresh {
                status: Some(status.as_u16()),
                message: format!("unexpected status code; received http status={}", status),
            });
        }

        let body = response.bytes().await.map_err(|e| Error::TokenRefresh {
            status: Some(status.as_u16()),
            message: format!("failed to read response body, {}", e),
        })?;
        let token = String::from_utf8(body.to_vec()).map_err(|e| Error::TokenRefresh {
            status: Some(status.as_u16()),
            message: format!("token is not valid UTF-8, {}", e),
        })?;

        self.token.store(Arc::new(token));
        debug!(url = %self.token_url, "bearer token refreshed");
        Ok(())
    }

    /// Spawn the periodic refresh loop on the current Tokio runtime.
    ///
    /// Failures inside the loop are logged and swallowed; the previous token stays in
    /// use and the next tick tries again. The loop stops when the returned handle is
    /// stopped or dropped.
    pub fn start_background_refresh(self: &Arc<Self>, interval: Duration) -> RefreshHandle {
        refresher::spawn(Arc::clone(self), interval)
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("subscription_key", &"<redacted>")
            .field("token_url", &self.token_url.as_str())
            .field("has_token", &self.has_token())
            .finish()
    }
}
