//! Domain types and pure validation rules for projects and tasks.
//!
//! Nothing in this crate performs I/O. The service layer runs these checks
//! before any repository call, and the repositories only ever receive the
//! validated `New*` values produced here.

pub mod error;
pub mod project;
pub mod task;
pub mod types;
pub mod validation;
