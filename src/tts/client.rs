//! TTS (Text-to-Speech) client.

use super::types::VoiceInfo;
use crate::auth::TokenManager;
use crate::client::EndpointSet;
use crate::ssml;
use crate::transport::HttpTransport;
use crate::types::{AudioOutput, VoiceRequest};
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, Instrument};
use url::Url;

/// Header naming the requested audio encoding.
pub const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";

/// Content type of the SSML request body.
pub const SSML_CONTENT_TYPE: &str = "application/ssml+xml";

/// Timeout applied by the convenience entry points.
pub const DEFAULT_SYNTHESIZE_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues authenticated synthesis requests.
///
/// Reads the shared token for every call and never writes it. Calls are independent
/// and may run concurrently.
#[derive(Debug, Clone)]
pub struct SynthesisClient {
    transport: HttpTransport,
    tokens: Arc<TokenManager>,
    synthesis_url: Url,
    voices_url: Url,
}

impl SynthesisClient {
    pub fn new(transport: HttpTransport, tokens: Arc<TokenManager>, endpoints: &EndpointSet) -> Self {
        Self {
            transport,
            tokens,
            synthesis_url: endpoints.synthesis().clone(),
            voices_url: endpoints.voices().clone(),
        }
    }

    /// Synthesize `request` into `format`, aborting when `cancel` fires.
    ///
    /// Returns the complete audio body on 200. Every other status maps through
    /// [`crate::error_code::RemoteErrorCode`]; nothing is retried.
    pub async fn synthesize(
        &self,
        request: &VoiceRequest,
        format: AudioOutput,
        cancel: &CancellationToken,
    ) -> Result<Bytes> {
        let payload = ssml::render(request)?;
        let token = self.tokens.current();
        let span = tracing::debug_span!(
            "synthesize",
            request_id = %uuid::Uuid::new_v4(),
            voice = %request.voice,
            format = format.as_str(),
        );

        let http = self
            .transport
            .post(&self.synthesis_url)
            .header(OUTPUT_FORMAT_HEADER, format.as_str())
            .header(CONTENT_TYPE, SSML_CONTENT_TYPE)
            .bearer_auth(token.as_str())
            .body(payload);

        let exchange = async {
            let response = self.transport.send(http).await?;
            let status = response.status().as_u16();
            if status != 200 {
                debug!(status, "synthesis rejected");
                return Err(Error::from_status(status));
            }
            let audio = response.bytes().await.map_err(Error::http)?;
            debug!(bytes = audio.len(), "synthesis complete");
            Ok(audio)
        };

        with_cancellation(cancel, exchange).instrument(span).await
    }

    /// Synthesize with a bounded timeout instead of a caller-managed token.
    pub async fn synthesize_with_timeout(
        &self,
        request: &VoiceRequest,
        format: AudioOutput,
        timeout: Duration,
    ) -> Result<Bytes> {
        let cancel = CancellationToken::new();
        with_timeout("synthesize", timeout, self.synthesize(request, format, &cancel)).await
    }

    /// Fetch the voices available in the region.
    pub async fn list_voices(&self, cancel: &CancellationToken) -> Result<Vec<VoiceInfo>> {
        let token = self.tokens.current();
        let http = self
            .transport
            .get(&self.voices_url)
            .bearer_auth(token.as_str());

        let exchange = async {
            let response = self.transport.send(http).await?;
            let status = response.status().as_u16();
            if status != 200 {
                return Err(Error::from_status(status));
            }
            let body = response.bytes().await.map_err(Error::http)?;
            let voices: Vec<VoiceInfo> = serde_json::from_slice(&body)?;
            debug!(count = voices.len(), "voice list fetched");
            Ok(voices)
        };

        with_cancellation(cancel, exchange).await
    }
}

async fn with_cancellation<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = fut => result,
    }
}

pub(crate) async fn with_timeout<T>(
    operation: &'static str,
    after: Duration,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    match tokio::time::timeout(after, fut).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout { operation, after }),
    }
}
