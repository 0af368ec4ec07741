//! Response models for the list operations
//!
//! Only the fields the SDK surfaces are modelled; unknown fields are ignored
//! on decode.

use crate::pagination::{PaginatedCollection, PaginationLink};
use crate::types::AnyMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared
// ============================================================================

/// Lifecycle state of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    Ready,
    Deleting,
    DeletingFailed,
    /// A state this SDK version does not know about
    #[serde(other)]
    Unknown,
}

/// Reference to the project that owns a config or environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReference {
    pub id: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub crn: Option<String>,
    #[serde(default)]
    pub definition: Option<ProjectReferenceDefinition>,
}

/// Name of the referenced project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReferenceDefinition {
    pub name: String,
}

// ============================================================================
// Projects
// ============================================================================

/// A project as returned by `GET /v1/projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    #[serde(default)]
    pub crn: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub resource_group_id: Option<String>,
    #[serde(default)]
    pub state: Option<ProjectState>,
    pub definition: ProjectDefinitionSummary,
}

/// User-editable part of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDefinitionSummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub destroy_on_delete: Option<bool>,
    #[serde(default)]
    pub monitoring_enabled: Option<bool>,
}

/// One page of projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCollection {
    pub limit: i64,
    #[serde(default)]
    pub first: Option<PaginationLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,
    #[serde(default)]
    pub projects: Vec<ProjectSummary>,
}

impl PaginatedCollection for ProjectCollection {
    type Item = ProjectSummary;

    fn next_link(&self) -> Option<&PaginationLink> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<ProjectSummary> {
        self.projects
    }
}

// ============================================================================
// Environments
// ============================================================================

/// A deployment environment of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub id: String,
    pub project: ProjectReference,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub target_account: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    pub definition: EnvironmentDefinition,
}

/// User-editable part of an environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Input values shared by every config deployed to this environment
    #[serde(default)]
    pub inputs: AnyMap,
}

/// One page of environments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentCollection {
    pub limit: i64,
    #[serde(default)]
    pub first: Option<PaginationLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,
    #[serde(default)]
    pub environments: Vec<Environment>,
}

impl PaginatedCollection for EnvironmentCollection {
    type Item = Environment;

    fn next_link(&self) -> Option<&PaginationLink> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<Environment> {
        self.environments
    }
}

// ============================================================================
// Configs
// ============================================================================

/// A config as returned by `GET /v1/projects/{id}/configs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigSummary {
    pub id: String,
    pub version: i64,
    /// Server-side lifecycle state, e.g. `draft`, `validated`, `deployed`
    pub state: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub deployment_model: Option<String>,
    pub project: ProjectReference,
    pub definition: ProjectConfigDefinitionSummary,
}

/// User-editable part of a config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigDefinitionSummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Catalog locator of the deployable architecture
    #[serde(default)]
    pub locator_id: Option<String>,
}

/// One page of configs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigCollection {
    pub limit: i64,
    #[serde(default)]
    pub first: Option<PaginationLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,
    #[serde(default)]
    pub configs: Vec<ProjectConfigSummary>,
}

impl PaginatedCollection for ProjectConfigCollection {
    type Item = ProjectConfigSummary;

    fn next_link(&self) -> Option<&PaginationLink> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<ProjectConfigSummary> {
        self.configs
    }
}
