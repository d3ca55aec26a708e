//! Project status, creation payload and validation rules.

use serde::Deserialize;

use crate::types::{define_text_enum, DbId};
use crate::validation::{validate_title, ValidationError};

define_text_enum! {
    /// Project lifecycle status.
    ProjectStatus (invalid = ValidationError::InvalidStatus) {
        Idea = "idea",
        Planning = "planning",
        Ongoing = "ongoing",
        Testing = "testing",
        BugFixes = "bug_fixes",
        Deployed = "deployed",
        Finished = "finished",
        Archived = "archived",
        OnHold = "on_hold",
        Refactoring = "refactoring",
    }
}

/// Payload for creating a project, as decoded from the client.
///
/// `status` stays raw text here so an unknown value is reported as
/// [`ValidationError::InvalidStatus`] instead of a decoding failure, and a
/// missing `tech_stack_ids` decodes as empty so it is reported as
/// [`ValidationError::NoTechStackItems`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub status: String,
    #[serde(default)]
    pub tech_stack_ids: Vec<DbId>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// A project that passed validation and is ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub tech_stack_ids: Vec<DbId>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// Reject empty descriptions.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    Ok(())
}

/// A project must link at least one tech stack item.
pub fn validate_tech_stack(ids: &[DbId]) -> Result<(), ValidationError> {
    if ids.is_empty() {
        return Err(ValidationError::NoTechStackItems);
    }
    Ok(())
}

impl CreateProject {
    /// Run every project rule, returning the first violation.
    ///
    /// Order: title, description, status, tech stack.
    pub fn validate(self) -> Result<NewProject, ValidationError> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        let status: ProjectStatus = self.status.parse()?;
        validate_tech_stack(&self.tech_stack_ids)?;

        Ok(NewProject {
            title: self.title,
            description: self.description,
            status,
            tech_stack_ids: self.tech_stack_ids,
            github_url: self.github_url,
            live_url: self.live_url,
        })
    }
}
