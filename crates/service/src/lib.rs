//! Validation-then-persist orchestration over the repository traits.
//!
//! Services never touch the database directly: they validate input with
//! `taskhub_core`, hand the typed result to a repository, and translate
//! repository failures into [`CoreError`](taskhub_core::error::CoreError).

pub mod project;
pub mod task;

pub use project::ProjectService;
pub use task::TaskService;
