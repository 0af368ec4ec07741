//! Projects API service client

use super::models::{EnvironmentCollection, ProjectCollection, ProjectConfigCollection};
use super::options::{ListConfigsOptions, ListProjectEnvironmentsOptions, ListProjectsOptions};
use crate::config::{parse_service_url, ProjectV1Config};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use tracing::debug;
use url::Url;

/// Client for the Projects API.
///
/// Wraps an [`HttpClient`] that carries retry, rate limiting and
/// authentication; every list call is a single GET against the service URL.
pub struct ProjectV1 {
    http: HttpClient,
    service_url: Url,
}

impl ProjectV1 {
    /// Build a client from a validated config
    pub fn new(config: ProjectV1Config) -> Result<Self> {
        config.validate()?;
        let service_url = parse_service_url(&config.service_url)?;
        let http = HttpClient::with_auth(config.http, config.auth)?;

        debug!(
            service_url = %service_url,
            auth = http.authenticator().map_or("noauth", |a| a.config().kind()),
            "Created Projects client"
        );
        Ok(Self { http, service_url })
    }

    /// Build a client from `PROJECT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ProjectV1Config::from_env()?)
    }

    /// Base URL every endpoint is resolved against
    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    /// Underlying HTTP executor
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// `GET /v1/projects`
    pub async fn list_projects(&self, options: &ListProjectsOptions) -> Result<ProjectCollection> {
        let request = options.to_request()?;
        let url = self.endpoint(&["v1", "projects"])?;
        self.http.get_json(url, request).await
    }

    /// `GET /v1/projects/{project_id}/environments`
    pub async fn list_project_environments(
        &self,
        options: &ListProjectEnvironmentsOptions,
    ) -> Result<EnvironmentCollection> {
        let request = options.to_request()?;
        let url = self.endpoint(&["v1", "projects", &options.project_id, "environments"])?;
        self.http.get_json(url, request).await
    }

    /// `GET /v1/projects/{project_id}/configs`
    pub async fn list_configs(&self, options: &ListConfigsOptions) -> Result<ProjectConfigCollection> {
        let request = options.to_request()?;
        let url = self.endpoint(&["v1", "projects", &options.project_id, "configs"])?;
        self.http.get_json(url, request).await
    }

    /// Append path segments to the service URL, percent-encoding each one
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.service_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("service URL '{}' cannot be a base", self.service_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl std::fmt::Debug for ProjectV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectV1")
            .field("service_url", &self.service_url.as_str())
            .field("http", &self.http)
            .finish()
    }
}
