use crate::auth::{TokenManager, DEFAULT_REFRESH_INTERVAL, TOKEN_VALIDITY};
use crate::client::core::SpeechClient;
use crate::client::endpoint::EndpointSet;
use crate::transport::http::{HttpTransport, DEFAULT_USER_AGENT};
use crate::tts::{SynthesisClient, DEFAULT_SYNTHESIZE_TIMEOUT};
use crate::types::Region;
use crate::{Error, ErrorContext, Result};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable. The subscription key and region fall
/// back to the `AZURE_KEY` and `AZURE_REGION` environment variables.
pub struct SpeechClientBuilder {
    subscription_key: Option<String>,
    region: Option<Region>,
    /// Explicit endpoints (primarily for testing with mock servers)
    endpoints: Option<EndpointSet>,
    refresh_interval: Duration,
    synthesize_timeout: Duration,
    user_agent: String,
}

impl SpeechClientBuilder {
    pub fn new() -> Self {
        Self {
            subscription_key: None,
            region: None,
            endpoints: None,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            synthesize_timeout: DEFAULT_SYNTHESIZE_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Subscription key for the speech resource.
    pub fn subscription_key(mut self, key: impl Into<String>) -> Self {
        self.subscription_key = Some(key.into());
        self
    }

    /// Region the speech resource lives in.
    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Use explicit endpoints instead of deriving them from the region.
    ///
    /// This is primarily for testing with mock servers.
    pub fn endpoints(mut self, endpoints: EndpointSet) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Background refresh cadence. Must be non-zero and shorter than the 10 minute
    /// token validity window.
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Timeout used by [`SpeechClient::synthesize`] and [`SpeechClient::list_voices`].
    pub fn synthesize_timeout(mut self, timeout: Duration) -> Self {
        self.synthesize_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    ///
    /// Performs one token refresh before returning; if it fails, no client is produced.
    /// Must be called inside a Tokio runtime, which hosts the background refresh task.
    pub async fn build(self) -> Result<SpeechClient> {
        let subscription_key = self
            .subscription_key
            .or_else(|| std::env::var("AZURE_KEY").ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "subscription key required",
                    ErrorContext::new()
                        .with_field_path("subscription_key")
                        .with_details("set it on the builder or via AZURE_KEY")
                        .with_source("client_builder"),
                )
            })?;

        let region = self.region.or_else(|| {
            std::env::var("AZURE_REGION")
                .ok()
                .filter(|r| !r.trim().is_empty())
                .map(Region::from)
        });

        let endpoints = match self.endpoints {
            Some(endpoints) => endpoints,
            None => {
                let region = region.as_ref().ok_or_else(|| {
                    Error::configuration_with_context(
                        "region required",
                        ErrorContext::new()
                            .with_field_path("region")
                            .with_details("set it on the builder or via AZURE_REGION")
                            .with_source("client_builder"),
                    )
                })?;
                EndpointSet::for_region(region)?
            }
        };

        if self.refresh_interval.is_zero() || self.refresh_interval >= TOKEN_VALIDITY {
            return Err(Error::configuration_with_context(
                "refresh interval must be non-zero and shorter than the token validity window",
                ErrorContext::new()
                    .with_field_path("refresh_interval")
                    .with_details(format!("{:?}", self.refresh_interval))
                    .with_source("client_builder"),
            ));
        }
        if self.synthesize_timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "synthesize timeout must be non-zero",
                ErrorContext::new()
                    .with_field_path("synthesize_timeout")
                    .with_source("client_builder"),
            ));
        }

        let transport = HttpTransport::new(self.user_agent)?;
        let tokens = Arc::new(TokenManager::new(
            subscription_key,
            endpoints.token().clone(),
            transport.clone(),
        ));

        // api requires a token younger than 10 minutes; fetch the first one now
        tokens.refresh().await?;
        let refresher = tokens.start_background_refresh(self.refresh_interval);

        let synthesis = SynthesisClient::new(transport, Arc::clone(&tokens), &endpoints);
        info!(
            region = region.as_ref().map(Region::as_str).unwrap_or("<custom endpoints>"),
            synthesis_url = %endpoints.synthesis(),
            "speech client ready"
        );

        Ok(SpeechClient {
            region,
            endpoints,
            tokens,
            synthesis,
            refresher: Mutex::new(Some(refresher)),
            closed: AtomicBool::new(false),
            synthesize_timeout: self.synthesize_timeout,
        })
    }
}

impl Default for SpeechClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
