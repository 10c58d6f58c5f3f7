//! SeaORM entities for the bug tracker schema.
//!
//! Table definitions mirror the `migration` crate. Lookup tables (`status`,
//! `severity`, `app`) are referenced from bugs through one-row-per-bug join
//! tables (`bug_status`, `bug_severity`, `bug_app`).

pub mod prelude;

pub mod app;
pub mod bug;
pub mod bug_app;
pub mod bug_severity;
pub mod bug_status;
pub mod comment_thread;
pub mod severity;
pub mod status;
pub mod user;
