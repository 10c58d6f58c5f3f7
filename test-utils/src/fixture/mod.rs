//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for use in
//! unit tests. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let bug = fixture::bug::entity();
//!
//! // Create with custom fields
//! let bug = fixture::bug::entity_builder()
//!     .bug_name("Broken link")
//!     .build();
//! ```

pub mod bug;
pub mod user;

pub use bug::{entity as bug_entity, entity_builder as bug_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
