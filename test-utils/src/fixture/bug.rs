//! Bug fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating bug entity models without database insertion.

use chrono::{DateTime, TimeZone, Utc};
use entity::bug;

/// Default test bug name.
pub const DEFAULT_BUG_NAME: &str = "Test Bug";

/// Default test bug description.
pub const DEFAULT_DESCRIPTION: &str = "Clicking save does nothing";

/// Default reporting user id.
pub const DEFAULT_USER_ID: i32 = 1;

/// Fixed creation time so fixtures compare equal across runs.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates an open (not completed) bug entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - bug_name: `"Test Bug"`
/// - description: `"Clicking save does nothing"`
/// - user_id: `1`
/// - completed_at / completed_notes: `None`
pub fn entity() -> bug::Model {
    entity_builder().build()
}

/// Creates a bug entity builder for customization.
pub fn entity_builder() -> BugEntityBuilder {
    BugEntityBuilder::default()
}

/// Builder for creating customized bug entity models.
pub struct BugEntityBuilder {
    id: i32,
    bug_name: String,
    description: String,
    user_id: i32,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    completed_notes: Option<String>,
}

impl Default for BugEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            bug_name: DEFAULT_BUG_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            user_id: DEFAULT_USER_ID,
            created_at: default_created_at(),
            completed_at: None,
            completed_notes: None,
        }
    }
}

impl BugEntityBuilder {
    /// Sets the bug ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the bug name.
    pub fn bug_name(mut self, bug_name: impl Into<String>) -> Self {
        self.bug_name = bug_name.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the bug as completed at the default creation time with the given notes.
    pub fn completed(mut self, notes: impl Into<String>) -> Self {
        self.completed_at = Some(default_created_at());
        self.completed_notes = Some(notes.into());
        self
    }

    /// Builds and returns the bug entity model.
    pub fn build(self) -> bug::Model {
        bug::Model {
            id: self.id,
            bug_name: self.bug_name,
            description: self.description,
            user_id: self.user_id,
            created_at: self.created_at,
            completed_at: self.completed_at,
            completed_notes: self.completed_notes,
        }
    }
}
