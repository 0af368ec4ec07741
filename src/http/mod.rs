//! HTTP client module
//!
//! The transport every list operation runs on.
//!
//! # Features
//!
//! - **Automatic Retries**: 429, 5xx, timeouts and connect errors, with backoff
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Rate Limiting**: Optional token bucket limiter using governor
//! - **Authentication**: Integration with the auth module

mod client;
mod rate_limit;

pub use client::{error_message, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
