//! Field-rule violations shared by project and task validation.
//!
//! Each variant corresponds to exactly one rule. The HTTP layer renders the
//! `Display` text verbatim to the client, so messages are written for end
//! users rather than operators.

/// A rejected field rule. Validation stops at the first violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title is required")]
    TitleRequired,

    #[error("project description is required")]
    MissingDescription,

    #[error(
        "project status should be one of: 'idea', 'planning', 'ongoing', 'testing', \
         'bug_fixes', 'deployed', 'finished', 'archived', 'on_hold' or 'refactoring'"
    )]
    InvalidStatus,

    #[error("project needs at least one tech stack item")]
    NoTechStackItems,

    #[error("task priority should be 'high', 'medium' or 'low'")]
    InvalidPriority,

    #[error(
        "task domain should be one of: 'work', 'university', 'personal', 'coding', \
         'health', 'finance', 'social', 'home', 'study', 'travel' or 'administration'"
    )]
    InvalidDomain,

    #[error("non-backlog task has to have a deadline")]
    MissingDeadline,

    #[error("backlog task should not have a deadline")]
    BacklogWithDeadline,
}

/// Reject titles that are empty.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    Ok(())
}
