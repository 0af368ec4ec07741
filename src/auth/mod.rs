//! Authentication module
//!
//! Supports: no auth, HTTP Basic, static Bearer token, IAM API key
//!
//! The `Authenticator` applies credentials to each request and caches the
//! bearer token obtained from IAM until it is due for refresh.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken, DEFAULT_IAM_URL};

#[cfg(test)]
mod tests;
