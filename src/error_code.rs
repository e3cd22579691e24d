//! Remote failure classification for the speech service.
//!
//! The synthesis endpoint documents a closed set of failure statuses. Each one maps to
//! a [`RemoteErrorCode`] carrying a stable name and the human-readable explanation that
//! is surfaced in [`crate::Error::Remote`]. Anything outside the table is
//! [`RemoteErrorCode::Unexpected`].
//!
//! | Status | Code                    |
//! |--------|-------------------------|
//! | 400    | `InvalidRequest`        |
//! | 401    | `Unauthorized`          |
//! | 403    | `Forbidden`             |
//! | 413    | `PayloadTooLarge`       |
//! | 415    | `UnsupportedMediaType`  |
//! | 429    | `TooManyRequests`       |
//! | 502    | `BadGateway`            |
//! | other  | `Unexpected`            |
//!
//! ## Example
//!
//! ```rust
//! use azure_tts::error_code::RemoteErrorCode;
//!
//! let code = RemoteErrorCode::from_http_status(429);
//! assert_eq!(code, RemoteErrorCode::TooManyRequests);
//! assert_eq!(code.name(), "too_many_requests");
//! assert!(code.retryable());
//! ```

use std::fmt;

/// Classified remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteErrorCode {
    /// 400: a parameter is missing, empty, null or invalid
    InvalidRequest,
    /// 401: subscription key or token is invalid, expired, or for another region
    Unauthorized,
    /// 403: the voice or another parameter is not permitted
    Forbidden,
    /// 413: the SSML input exceeds the service's length limit
    PayloadTooLarge,
    /// 415: wrong `Content-Type`
    UnsupportedMediaType,
    /// 429: request rate or quota exceeded
    TooManyRequests,
    /// 502: network or server-side fault
    BadGateway,
    /// Any other status
    Unexpected,
}

impl RemoteErrorCode {
    /// Maps an HTTP status code to its classification.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            413 => Self::PayloadTooLarge,
            415 => Self::UnsupportedMediaType,
            429 => Self::TooManyRequests,
            502 => Self::BadGateway,
            _ => Self::Unexpected,
        }
    }

    /// Returns the standard name (e.g., `"invalid_request"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::PayloadTooLarge => "payload_too_large",
            Self::UnsupportedMediaType => "unsupported_media_type",
            Self::TooManyRequests => "too_many_requests",
            Self::BadGateway => "bad_gateway",
            Self::Unexpected => "unexpected",
        }
    }

    /// The canonical status for this code; `None` for [`Self::Unexpected`].
    #[inline]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidRequest => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::PayloadTooLarge => Some(413),
            Self::UnsupportedMediaType => Some(415),
            Self::TooManyRequests => Some(429),
            Self::BadGateway => Some(502),
            Self::Unexpected => None,
        }
    }

    /// Human-readable explanation surfaced in error messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "A required parameter is missing, empty, or null. Or, the value passed to either a required or optional parameter is invalid. A common issue is a header that is too long",
            Self::Unauthorized => "The request is not authorized. Check to make sure your subscription key or token is valid and in the correct region",
            Self::Forbidden => "The request is forbidden. Check the voice name or other parameters",
            Self::PayloadTooLarge => "The SSML input is longer than the service allows",
            Self::UnsupportedMediaType => "It's possible that the wrong Content-Type was provided. Content-Type should be set to application/ssml+xml",
            Self::TooManyRequests => "You have exceeded the quota or rate of requests allowed for your subscription",
            Self::BadGateway => "Network or server-side issue. May also indicate invalid headers",
            Self::Unexpected => "received unexpected HTTP status code",
        }
    }

    /// Whether a caller could reasonably retry later.
    ///
    /// Informational only; this crate never retries on its own.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::TooManyRequests | Self::BadGateway)
    }
}

impl fmt::Display for RemoteErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
