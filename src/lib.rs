// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Projects SDK
//!
//! A Rust client for the Projects API: list projects, their deployment
//! environments and their configs, one page at a time or all at once.
//!
//! ## Features
//!
//! - **Token Pagination**: Continuation tokens read from `next` links, one generic pager for every list call
//! - **Multiple Auth Types**: IAM API key, bearer token, Basic, or none
//! - **Resilient HTTP**: Retries with backoff, `Retry-After`, client-side rate limiting
//! - **Layered Config**: Build in code, from `PROJECT_*` environment variables, or from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use projects_sdk::project::{ListConfigsOptions, ProjectV1};
//! use projects_sdk::{AuthConfig, ProjectV1Config, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ProjectV1::new(ProjectV1Config::new(AuthConfig::iam("my-api-key")))?;
//!
//!     let mut pager = client.configs_pager(ListConfigsOptions::new("project-id").with_limit(25))?;
//!     while pager.has_next() {
//!         for config in pager.get_next().await? {
//!             println!("{} {}", config.id, config.definition.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       ProjectV1 client                          │
//! │  list_projects   list_project_environments   list_configs       │
//! │  projects_pager  project_environments_pager  configs_pager      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────────┬───────────────────┐
//! │    Auth      │            HTTP              │    Pagination     │
//! ├──────────────┼──────────────────────────────┼───────────────────┤
//! │ IAM API key  │ Retry + Backoff              │ extract_token     │
//! │ Bearer       │ Retry-After                  │ Pager             │
//! │ Basic        │ Rate Limit                   │ into_stream       │
//! └──────────────┴──────────────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Token pagination and the generic pager
pub mod pagination;

/// Projects API client
pub mod project;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::AuthConfig;
pub use config::ProjectV1Config;
pub use error::{Error, Result};
pub use pagination::{extract_token, PaginationLink, Pager, PagerState};
pub use project::ProjectV1;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
