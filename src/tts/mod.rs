//! Speech synthesis over the REST endpoint.

mod client;
mod types;

pub use client::{
    SynthesisClient, DEFAULT_SYNTHESIZE_TIMEOUT, OUTPUT_FORMAT_HEADER, SSML_CONTENT_TYPE,
};
pub use types::VoiceInfo;

pub(crate) use client::with_timeout;
