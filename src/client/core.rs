use crate::auth::{RefreshHandle, TokenManager};
use crate::client::endpoint::EndpointSet;
use crate::tts::{SynthesisClient, VoiceInfo};
use crate::types::{AudioOutput, Region, VoiceRequest};
use crate::{Error, Result};
use bytes::Bytes;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Lifecycle of a [`SpeechClient`].
///
/// A client only exists once its initial token refresh has succeeded, so there is no
/// observable uninitialized state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Ready,
    Closed,
}

/// Text-to-speech client with a self-refreshing bearer token.
///
/// Cheap to share behind an `Arc`; synthesis calls may run concurrently. Dropping the
/// client stops the background refresh.
pub struct SpeechClient {
    pub(crate) region: Option<Region>,
    pub(crate) endpoints: EndpointSet,
    pub(crate) tokens: Arc<TokenManager>,
    pub(crate) synthesis: SynthesisClient,
    pub(crate) refresher: Mutex<Option<RefreshHandle>>,
    pub(crate) closed: AtomicBool,
    pub(crate) synthesize_timeout: Duration,
}

impl SpeechClient {
    pub fn builder() -> crate::client::SpeechClientBuilder {
        crate::client::SpeechClientBuilder::new()
    }

    /// Build a client for `region`, fetching the first token before returning.
    pub async fn new(subscription_key: impl Into<String>, region: Region) -> Result<Self> {
        Self::builder()
            .subscription_key(subscription_key)
            .region(region)
            .build()
            .await
    }

    /// Synthesize with the configured timeout (30 seconds by default).
    pub async fn synthesize(&self, request: &VoiceRequest, format: AudioOutput) -> Result<Bytes> {
        self.synthesize_with_timeout(request, format, self.synthesize_timeout)
            .await
    }

    /// Synthesize under a caller-supplied timeout.
    pub async fn synthesize_with_timeout(
        &self,
        request: &VoiceRequest,
        format: AudioOutput,
        timeout: Duration,
    ) -> Result<Bytes> {
        self.ensure_ready()?;
        self.synthesis
            .synthesize_with_timeout(request, format, timeout)
            .await
    }

    /// Synthesize under a caller-managed cancellation token.
    ///
    /// Cancelling aborts the HTTP exchange and returns [`Error::Cancelled`]; the shared
    /// token is unaffected.
    pub async fn synthesize_with_cancellation(
        &self,
        request: &VoiceRequest,
        format: AudioOutput,
        cancel: &CancellationToken,
    ) -> Result<Bytes> {
        self.ensure_ready()?;
        self.synthesis.synthesize(request, format, cancel).await
    }

    /// List the voices offered in this client's region.
    pub async fn list_voices(&self) -> Result<Vec<VoiceInfo>> {
        self.ensure_ready()?;
        let cancel = CancellationToken::new();
        crate::tts::with_timeout(
            "list_voices",
            self.synthesize_timeout,
            self.synthesis.list_voices(&cancel),
        )
        .await
    }

    /// Refresh the bearer token now instead of waiting for the next scheduled refresh.
    ///
    /// On failure the previous token stays in use.
    pub async fn refresh_token(&self) -> Result<()> {
        self.ensure_ready()?;
        self.tokens.refresh().await
    }

    /// Stop the background refresh. Further calls return [`Error::Closed`].
    ///
    /// Idempotent. A refresh or synthesis already in flight is not interrupted.
    pub fn shutdown(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let handle = match self.refresher.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            handle.stop();
        }
        info!("speech client shut down");
    }

    pub fn state(&self) -> ClientState {
        if self.closed.load(Ordering::SeqCst) {
            ClientState::Closed
        } else {
            ClientState::Ready
        }
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn endpoints(&self) -> &EndpointSet {
        &self.endpoints
    }

    /// The token manager backing this client.
    pub fn token_manager(&self) -> &Arc<TokenManager> {
        &self.tokens
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state() {
            ClientState::Ready => Ok(()),
            ClientState::Closed => Err(Error::Closed),
        }
    }
}

impl std::fmt::Debug for SpeechClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechClient")
            .field("region", &self.region)
            .field("endpoints", &self.endpoints)
            .field("tokens", &self.tokens)
            .field("state", &self.state())
            .finish()
    }
}
