//! Options for the list operations

use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::pagination::{PagedOptions, TOKEN_PARAM};
use crate::types::StringMap;

/// Largest page size the service accepts
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Options for `list_projects`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProjectsOptions {
    /// Continuation token of the page to fetch
    pub token: Option<String>,
    /// Maximum number of projects per page (1..=100)
    pub limit: Option<i64>,
    /// Extra request headers
    pub headers: StringMap,
}

impl ListProjectsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub(crate) fn to_request(&self) -> Result<RequestConfig> {
        paged_request(self.token.as_deref(), self.limit, &self.headers)
    }
}

impl PagedOptions for ListProjectsOptions {
    fn page_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn for_page(&self, token: Option<String>) -> Self {
        Self {
            token,
            ..self.clone()
        }
    }
}

/// Options for `list_project_environments`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProjectEnvironmentsOptions {
    /// Project whose environments are listed
    pub project_id: String,
    /// Continuation token of the page to fetch
    pub token: Option<String>,
    /// Maximum number of environments per page (1..=100)
    pub limit: Option<i64>,
    /// Extra request headers
    pub headers: StringMap,
}

impl ListProjectEnvironmentsOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub(crate) fn to_request(&self) -> Result<RequestConfig> {
        require_project_id(&self.project_id)?;
        paged_request(self.token.as_deref(), self.limit, &self.headers)
    }
}

impl PagedOptions for ListProjectEnvironmentsOptions {
    fn page_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn for_page(&self, token: Option<String>) -> Self {
        Self {
            token,
            ..self.clone()
        }
    }
}

/// Options for `list_configs`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListConfigsOptions {
    /// Project whose configs are listed
    pub project_id: String,
    /// Continuation token of the page to fetch
    pub token: Option<String>,
    /// Maximum number of configs per page (1..=100)
    pub limit: Option<i64>,
    /// Extra request headers
    pub headers: StringMap,
}

impl ListConfigsOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub(crate) fn to_request(&self) -> Result<RequestConfig> {
        require_project_id(&self.project_id)?;
        paged_request(self.token.as_deref(), self.limit, &self.headers)
    }
}

impl PagedOptions for ListConfigsOptions {
    fn page_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn for_page(&self, token: Option<String>) -> Self {
        Self {
            token,
            ..self.clone()
        }
    }
}

fn require_project_id(project_id: &str) -> Result<()> {
    if project_id.is_empty() {
        return Err(Error::missing_field("project_id"));
    }
    Ok(())
}

/// Query and headers shared by every paginated list call
fn paged_request(token: Option<&str>, limit: Option<i64>, headers: &StringMap) -> Result<RequestConfig> {
    if let Some(limit) = limit {
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(Error::invalid_value(
                "limit",
                format!("must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"),
            ));
        }
    }

    Ok(RequestConfig::new()
        .headers(headers)
        .query_opt(TOKEN_PARAM, token.filter(|t| !t.is_empty()))
        .query_opt("limit", limit))
}
