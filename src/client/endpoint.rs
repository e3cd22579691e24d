//! Endpoint derivation from a region.

use crate::types::Region;
use crate::{Error, ErrorContext, Result};
use url::Url;

const TOKEN_URL_TEMPLATE: &str = "https://{region}.api.cognitive.microsoft.com/sts/v1.0/issueToken";
const SYNTHESIS_URL_TEMPLATE: &str = "https://{region}.tts.speech.microsoft.com/cognitiveservices/v1";
const VOICES_URL_TEMPLATE: &str =
    "https://{region}.tts.speech.microsoft.com/cognitiveservices/voices/list";

/// The three service URLs a client talks to. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSet {
    token: Url,
    synthesis: Url,
    voices: Url,
}

impl EndpointSet {
    /// Derive the endpoints for a region by substituting its identifier.
    ///
    /// The region string is not checked against the service; a region whose identifier
    /// cannot form a host name fails here as a configuration error.
    pub fn for_region(region: &Region) -> Result<Self> {
        let id = region.as_str();
        if id.is_empty() {
            return Err(Error::configuration_with_context(
                "region must not be empty",
                ErrorContext::new()
                    .with_field_path("region")
                    .with_source("endpoint_set"),
            ));
        }
        Self::custom(
            &TOKEN_URL_TEMPLATE.replace("{region}", id),
            &SYNTHESIS_URL_TEMPLATE.replace("{region}", id),
            &VOICES_URL_TEMPLATE.replace("{region}", id),
        )
    }

    /// Explicit endpoints, primarily for testing against mock servers.
    pub fn custom(token: &str, synthesis: &str, voices: &str) -> Result<Self> {
        Ok(Self {
            token: parse_url("endpoints.token", token)?,
            synthesis: parse_url("endpoints.synthesis", synthesis)?,
            voices: parse_url("endpoints.voices", voices)?,
        })
    }

    /// Token issuance endpoint.
    pub fn token(&self) -> &Url {
        &self.token
    }

    /// Synthesis endpoint.
    pub fn synthesis(&self) -> &Url {
        &self.synthesis
    }

    /// Voice list endpoint.
    pub fn voices(&self) -> &Url {
        &self.voices
    }
}

fn parse_url(field: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid endpoint URL: {}", e),
            ErrorContext::new()
                .with_field_path(field)
                .with_details(raw.to_string())
                .with_source("endpoint_set"),
        )
    })
}
