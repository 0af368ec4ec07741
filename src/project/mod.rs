//! Projects API client
//!
//! The three paginated list operations, their response models and the
//! pagers bound to them.

mod client;
mod models;
mod options;
mod pagers;

pub use client::ProjectV1;
pub use models::{
    Environment, EnvironmentCollection, EnvironmentDefinition, ProjectCollection,
    ProjectConfigCollection, ProjectConfigDefinitionSummary, ProjectConfigSummary,
    ProjectDefinitionSummary, ProjectReference, ProjectReferenceDefinition, ProjectState,
    ProjectSummary,
};
pub use options::{
    ListConfigsOptions, ListProjectEnvironmentsOptions, ListProjectsOptions, MAX_PAGE_LIMIT,
};
pub use pagers::{
    ConfigsList, ConfigsPager, ProjectEnvironmentsList, ProjectEnvironmentsPager, ProjectsList,
    ProjectsPager,
};
