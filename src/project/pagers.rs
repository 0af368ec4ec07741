//! Pagers bound to the Projects API list operations

use super::client::ProjectV1;
use super::models::{Environment, ProjectConfigSummary, ProjectSummary};
use super::options::{ListConfigsOptions, ListProjectEnvironmentsOptions, ListProjectsOptions};
use crate::error::Result;
use crate::pagination::{ListOperation, Page, Pager};
use async_trait::async_trait;

/// Pager over `GET /v1/projects`
pub type ProjectsPager<'a> = Pager<ListProjectsOptions, ProjectSummary, ProjectsList<'a>>;

/// Pager over `GET /v1/projects/{project_id}/environments`
pub type ProjectEnvironmentsPager<'a> =
    Pager<ListProjectEnvironmentsOptions, Environment, ProjectEnvironmentsList<'a>>;

/// Pager over `GET /v1/projects/{project_id}/configs`
pub type ConfigsPager<'a> = Pager<ListConfigsOptions, ProjectConfigSummary, ConfigsList<'a>>;

/// `list_projects` bound to a client
#[derive(Debug, Clone, Copy)]
pub struct ProjectsList<'a> {
    client: &'a ProjectV1,
}

#[async_trait]
impl<'a> ListOperation<ListProjectsOptions, ProjectSummary> for ProjectsList<'a> {
    async fn list(&self, options: ListProjectsOptions) -> Result<Page<ProjectSummary>> {
        let collection = self.client.list_projects(&options).await?;
        Ok(Page::from_collection(collection))
    }
}

/// `list_project_environments` bound to a client
#[derive(Debug, Clone, Copy)]
pub struct ProjectEnvironmentsList<'a> {
    client: &'a ProjectV1,
}

#[async_trait]
impl<'a> ListOperation<ListProjectEnvironmentsOptions, Environment> for ProjectEnvironmentsList<'a> {
    async fn list(&self, options: ListProjectEnvironmentsOptions) -> Result<Page<Environment>> {
        let collection = self.client.list_project_environments(&options).await?;
        Ok(Page::from_collection(collection))
    }
}

/// `list_configs` bound to a client
#[derive(Debug, Clone, Copy)]
pub struct ConfigsList<'a> {
    client: &'a ProjectV1,
}

#[async_trait]
impl<'a> ListOperation<ListConfigsOptions, ProjectConfigSummary> for ConfigsList<'a> {
    async fn list(&self, options: ListConfigsOptions) -> Result<Page<ProjectConfigSummary>> {
        let collection = self.client.list_configs(&options).await?;
        Ok(Page::from_collection(collection))
    }
}

impl ProjectV1 {
    /// Pager over every project visible to the caller.
    ///
    /// `options` must not carry a token; `limit` and headers apply to each
    /// page.
    pub fn projects_pager(&self, options: ListProjectsOptions) -> Result<ProjectsPager<'_>> {
        Pager::new(ProjectsList { client: self }, options)
    }

    /// Pager over the environments of one project
    pub fn project_environments_pager(
        &self,
        options: ListProjectEnvironmentsOptions,
    ) -> Result<ProjectEnvironmentsPager<'_>> {
        Pager::new(ProjectEnvironmentsList { client: self }, options)
    }

    /// Pager over the configs of one project
    pub fn configs_pager(&self, options: ListConfigsOptions) -> Result<ConfigsPager<'_>> {
        Pager::new(ConfigsList { client: self }, options)
    }
}
