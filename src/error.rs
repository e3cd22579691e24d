use crate::error_code::RemoteErrorCode;
use crate::transport::TransportError;
use std::time::Duration;
use thiserror::Error;

/// Structured error context for configuration faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field or setting that caused the error (e.g., "endpoints.synthesis", "region")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the error (e.g., "client_builder", "ssml")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the text-to-speech client.
///
/// Faults fall into four groups: local configuration/render faults, transport faults
/// (network, timeout, cancellation), remote protocol faults keyed by HTTP status, and
/// token refresh faults.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("{operation} timed out after {}ms", .after.as_millis())]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("request was cancelled")]
    Cancelled,

    #[error("{status} - {message}")]
    Remote {
        status: u16,
        code: RemoteErrorCode,
        message: String,
    },

    #[error("token refresh failed: {message}")]
    TokenRefresh {
        status: Option<u16>,
        message: String,
    },

    #[error("client has been shut down")]
    Closed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a configuration error without context.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a configuration error with structured context.
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Map a non-success HTTP status to a remote error using the status table.
    pub fn from_status(status: u16) -> Self {
        let code = RemoteErrorCode::from_http_status(status);
        Error::Remote {
            status,
            code,
            message: code.description().to_string(),
        }
    }

    /// Wrap a `reqwest` failure as a transport error.
    pub fn http(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::Http(err))
    }

    /// The remote error classification, if this is a remote protocol fault.
    pub fn remote_code(&self) -> Option<RemoteErrorCode> {
        match self {
            Error::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            Error::TokenRefresh { status, .. } => *status,
            Error::Transport(TransportError::Http(e)) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Transport(TransportError::Http(e)) => e.is_timeout(),
            _ => false,
        }
    }
}
