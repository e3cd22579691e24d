use crate::Result;
use std::env;
use std::time::Duration;
use reqwest::Proxy;
use url::Url;

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = "azuretts";

/// Pooled HTTP client plus the per-request defaults every call needs.
///
/// The pool is shared by the token manager and the synthesis client so that the
/// periodic refresh does not open a fresh connection every cycle.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpTransport {
    pub fn new(user_agent: impl Into<String>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(
                env::var("AZURE_TTS_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            )
            .pool_idle_timeout(Some(Duration::from_secs(
                env::var("AZURE_TTS_POOL_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(90),
            )));

        if let Ok(proxy_url) = env::var("AZURE_TTS_PROXY_URL") {
            match Proxy::all(&proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => tracing::warn!("ignoring AZURE_TTS_PROXY_URL: {}", e),
            }
        }

        let client = builder.build().map_err(|e| {
            crate::Error::configuration_with_context(
                format!("failed to build HTTP client: {}", e),
                crate::ErrorContext::new().with_source("http_transport"),
            )
        })?;

        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Start a POST request with the transport's `User-Agent` already applied.
    pub fn post(&self, url: &Url) -> reqwest::RequestBuilder {
        self.client
            .post(url.clone())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
    }

    /// Start a GET request with the transport's `User-Agent` already applied.
    pub fn get(&self, url: &Url) -> reqwest::RequestBuilder {
        self.client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
    }

    /// Send a request, returning the raw response regardless of status.
    pub async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        request.send().await.map_err(crate::Error::http)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
