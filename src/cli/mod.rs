//! CLI module
//!
//! Command-line interface over the Projects API list operations.
//!
//! # Commands
//!
//! - `projects` - List projects
//! - `environments` - List the environments of a project
//! - `configs` - List the configs of a project
//!
//! Each command prints one page by default, or every page with `--all`.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;
