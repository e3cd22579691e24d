//! Bearer token lifecycle.
//!
//! The service accepts a subscription key only at the token issuance endpoint; every
//! synthesis call carries a short-lived bearer token instead. Tokens are valid for
//! [`TOKEN_VALIDITY`], so the [`TokenManager`] is refreshed proactively on a cadence
//! strictly shorter than that window rather than lazily after a 401.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`TokenManager`] | Owns the current token and performs refreshes |
//! | [`RefreshHandle`] | Stops the background refresh loop |

mod refresher;
mod token;

pub use refresher::RefreshHandle;
pub use token::{
    TokenManager, DEFAULT_REFRESH_INTERVAL, SUBSCRIPTION_KEY_HEADER, TOKEN_REFRESH_TIMEOUT,
    TOKEN_VALIDITY,
};
