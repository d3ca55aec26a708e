//! Project entity model.

use serde::Serialize;
use taskhub_core::project::ProjectStatus;
use taskhub_core::types::{DbId, Timestamp};

/// A persisted project together with its tech stack links.
///
/// Assembled from a `projects` row plus its `project_tech_stack` rows;
/// `tech_stack_ids` keeps the order the links were written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub tech_stack_ids: Vec<DbId>,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
