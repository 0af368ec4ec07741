//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Projects API command-line client
#[derive(Parser, Debug)]
#[command(name = "projects-sdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); defaults to PROJECT_* environment variables
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the service URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects
    Projects {
        #[command(flatten)]
        page: PageArgs,
    },

    /// List the environments of a project
    Environments {
        /// Project ID
        #[arg(long)]
        project_id: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List the configs of a project
    Configs {
        /// Project ID
        #[arg(long)]
        project_id: String,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Paging flags shared by every list command
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page size (1-100)
    #[arg(long)]
    pub limit: Option<i64>,

    /// Continuation token of the page to fetch
    #[arg(long, conflicts_with = "all")]
    pub token: Option<String>,

    /// Follow `next` links and print every item
    #[arg(long)]
    pub all: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
