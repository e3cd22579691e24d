//! # azure-tts
//!
//! Async client for the Azure Cognitive Services text-to-speech REST API.
//!
//! ## Overview
//!
//! A [`SpeechClient`] exchanges a subscription key for a short-lived bearer token, keeps
//! that token fresh on a background task, and turns [`VoiceRequest`]s into audio bytes
//! in any of the service's [`AudioOutput`] encodings.
//!
//! - **Payload rendering**: [`ssml::render`] produces the SSML document for a request
//! - **Token lifecycle**: [`TokenManager`] fetches the token and refreshes it every 9 minutes
//! - **Synthesis**: one authenticated POST per call; non-200 statuses map to [`Error::Remote`]
//! - **Shutdown**: [`SpeechClient::shutdown`] stops the refresh loop; later calls return [`Error::Closed`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use azure_tts::{AudioOutput, Gender, Locale, Region, SpeechClient, VoiceRequest};
//!
//! #[tokio::main]
//! async fn main() -> azure_tts::Result<()> {
//!     let client = SpeechClient::new("your-subscription-key", Region::EastUS).await?;
//!
//!     let request = VoiceRequest::new(
//!         "Hello, world",
//!         "en-US-JennyNeural",
//!         Locale::EnUs,
//!         Gender::Female,
//!     );
//!     let audio = client
//!         .synthesize(&request, AudioOutput::Audio16khz32kbitrateMonoMp3)
//!         .await?;
//!     std::fs::write("hello.mp3", &audio).ok();
//!
//!     client.shutdown();
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client facade, builder and endpoint derivation |
//! | [`auth`] | Token manager and background refresh |
//! | [`tts`] | Synthesis and voice listing requests |
//! | [`ssml`] | SSML payload rendering |
//! | [`types`] | Regions, locales, genders, audio encodings |
//! | [`error_code`] | HTTP status classification |
//! | [`transport`] | Shared HTTP connection pool |

pub mod auth;
pub mod client;
pub mod error_code;
pub mod ssml;
pub mod transport;
pub mod tts;
pub mod types;

// Re-export main types for convenience
pub use auth::{RefreshHandle, TokenManager};
pub use client::{ClientState, EndpointSet, SpeechClient, SpeechClientBuilder};
pub use error_code::RemoteErrorCode;
pub use tts::VoiceInfo;
pub use types::{AudioOutput, Gender, Locale, Region, VoiceRequest};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
