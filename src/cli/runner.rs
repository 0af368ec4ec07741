//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::config::ProjectV1Config;
use crate::error::Result;
use crate::pagination::{ListOperation, PagedOptions, Pager};
use crate::project::{
    ListConfigsOptions, ListProjectEnvironmentsOptions, ListProjectsOptions, ProjectV1,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = ProjectV1::new(self.load_config()?)?;
        let output = self.execute(&client).await?;
        self.output_message(&output)
    }

    /// Run the command against `client` and return the document to print
    pub async fn execute(&self, client: &ProjectV1) -> Result<Value> {
        match &self.cli.command {
            Commands::Projects { page } => {
                let options = apply_limit(ListProjectsOptions::new(), page.limit, |o, l| {
                    o.with_limit(l)
                });
                if page.all {
                    collect_all("projects", client.projects_pager(options)?).await
                } else {
                    let options = apply_token(options, page, |o, t| o.with_token(t));
                    to_json(&client.list_projects(&options).await?)
                }
            }
            Commands::Environments { project_id, page } => {
                let options = apply_limit(
                    ListProjectEnvironmentsOptions::new(project_id.as_str()),
                    page.limit,
                    |o, l| o.with_limit(l),
                );
                if page.all {
                    collect_all(
                        "environments",
                        client.project_environments_pager(options)?,
                    )
                    .await
                } else {
                    let options = apply_token(options, page, |o, t| o.with_token(t));
                    to_json(&client.list_project_environments(&options).await?)
                }
            }
            Commands::Configs { project_id, page } => {
                let options = apply_limit(
                    ListConfigsOptions::new(project_id.as_str()),
                    page.limit,
                    |o, l| o.with_limit(l),
                );
                if page.all {
                    collect_all("configs", client.configs_pager(options)?).await
                } else {
                    let options = apply_token(options, page, |o, t| o.with_token(t));
                    to_json(&client.list_configs(&options).await?)
                }
            }
        }
    }

    /// Load configuration from `--config` or the environment, then apply `--url`
    pub fn load_config(&self) -> Result<ProjectV1Config> {
        let config = match &self.cli.config {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                ProjectV1Config::from_yaml_file(path)?
            }
            None => ProjectV1Config::from_env()?,
        };

        let config = match &self.cli.url {
            Some(url) => config.with_service_url(url.as_str()),
            None => config,
        };
        config.validate()?;
        Ok(config)
    }

    fn output_message(&self, msg: &Value) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(msg)?,
        };
        println!("{text}");
        Ok(())
    }
}

fn apply_limit<O>(options: O, limit: Option<i64>, set: impl FnOnce(O, i64) -> O) -> O {
    match limit {
        Some(limit) => set(options, limit),
        None => options,
    }
}

fn apply_token<O>(options: O, page: &PageArgs, set: impl FnOnce(O, String) -> O) -> O {
    match &page.token {
        Some(token) => set(options, token.clone()),
        None => options,
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Drain a pager and wrap the items with the page count
async fn collect_all<O, T, L>(resource: &str, mut pager: Pager<O, T, L>) -> Result<Value>
where
    O: PagedOptions,
    T: Serialize,
    L: ListOperation<O, T>,
{
    let start = Instant::now();
    let items = pager.get_all().await?;

    info!(
        resource,
        pages = pager.pages_fetched(),
        items = items.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Listed all pages"
    );

    Ok(json!({
        "pages": pager.pages_fetched(),
        "total": items.len(),
        resource: to_json(&items)?,
    }))
}
