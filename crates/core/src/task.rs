//! Task priority, domain, payload and validation rules.
//!
//! A task is either in the backlog (no deadline) or scheduled (has a
//! deadline); never both and never neither. The same rules run on create
//! and on update.

use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::types::{define_text_enum, DbId, Timestamp};
use crate::validation::{validate_title, ValidationError};

define_text_enum! {
    /// How urgent a task is.
    Priority (invalid = ValidationError::InvalidPriority) {
        High = "high",
        Medium = "medium",
        Low = "low",
    }
}

define_text_enum! {
    /// Life area a task belongs to.
    Domain (invalid = ValidationError::InvalidDomain) {
        Work = "work",
        University = "university",
        Personal = "personal",
        Coding = "coding",
        Health = "health",
        Finance = "finance",
        Social = "social",
        Home = "home",
        Study = "study",
        Travel = "travel",
        Administration = "administration",
    }
}

/// Payload for creating or fully overwriting a task.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: String,
    pub domain: String,
    pub project_id: Option<DbId>,
    pub uni_module_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_deadline")]
    pub deadline: Option<Timestamp>,
    #[serde(default)]
    pub is_backlog: bool,
    #[serde(default)]
    pub completed: bool,
}

/// A task that passed validation and is ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub domain: Domain,
    pub project_id: Option<DbId>,
    pub uni_module_id: Option<DbId>,
    pub deadline: Option<Timestamp>,
    pub is_backlog: bool,
    pub completed: bool,
}

/// Enforce the backlog/deadline exclusivity rule.
pub fn validate_schedule(
    deadline: Option<&Timestamp>,
    is_backlog: bool,
) -> Result<(), ValidationError> {
    match (deadline, is_backlog) {
        (None, false) => Err(ValidationError::MissingDeadline),
        (Some(_), true) => Err(ValidationError::BacklogWithDeadline),
        (None, true) | (Some(_), false) => Ok(()),
    }
}

impl TaskInput {
    /// Run every task rule, returning the first violation.
    ///
    /// Order: title, priority, domain, deadline/backlog.
    pub fn validate(self) -> Result<NewTask, ValidationError> {
        validate_title(&self.title)?;
        let priority: Priority = self.priority.parse()?;
        let domain: Domain = self.domain.parse()?;
        validate_schedule(self.deadline.as_ref(), self.is_backlog)?;

        Ok(NewTask {
            title: self.title,
            description: self.description,
            priority,
            domain,
            project_id: self.project_id,
            uni_module_id: self.uni_module_id,
            deadline: self.deadline,
            is_backlog: self.is_backlog,
            completed: self.completed,
        })
    }
}

/// Accept either an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
/// (interpreted as midnight UTC).
fn deserialize_deadline<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_deadline(&raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid deadline '{raw}'")))
}

fn parse_deadline(raw: &str) -> Option<Timestamp> {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}
