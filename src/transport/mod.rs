//! HTTP transport shared by the token manager and the synthesis client.

pub mod http;

pub use http::{HttpTransport, TransportError};
