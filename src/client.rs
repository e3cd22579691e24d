//! Client facade for the text-to-speech service.
//!
//! Keep the public surface small and predictable: build a [`SpeechClient`] with
//! [`SpeechClientBuilder`], call `synthesize`, and `shutdown` when done. Implementation
//! details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod endpoint;

pub use builder::SpeechClientBuilder;
pub use core::{ClientState, SpeechClient};
pub use endpoint::EndpointSet;
