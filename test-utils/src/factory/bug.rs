//! Bug factory for creating test bugs with their lookup links.
//!
//! Every bug needs exactly one status, app, and severity link. The factory inserts the
//! bug row and all three join rows so tests start from a consistent state.

use crate::factory::{helpers::next_id, lookup::Lookups};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bugs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bug::BugFactory;
///
/// let bug = BugFactory::new(&db, user.id, &lookups)
///     .bug_name("Crash on save")
///     .severity("high")
///     .build()
///     .await?;
/// ```
pub struct BugFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    bug_name: String,
    description: String,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    completed_notes: Option<String>,
    lookups: Lookups,
    status_id: i32,
    app_id: i32,
    severity_id: i32,
}

impl<'a> BugFactory<'a> {
    /// Creates a new BugFactory with default values.
    ///
    /// Defaults:
    /// - bug_name: `"Bug {id}"` where id is auto-incremented
    /// - description: `"Steps to reproduce bug {id}"`
    /// - status: `open`, severity: `low`, app: the first app in `lookups`
    /// - not completed
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    /// - `user_id` - Id of the reporting user
    /// - `lookups` - Seeded lookup rows to resolve labels against
    pub fn new(db: &'a DatabaseConnection, user_id: i32, lookups: &Lookups) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            bug_name: format!("Bug {}", id),
            description: format!("Steps to reproduce bug {}", id),
            created_at: Utc::now(),
            completed_at: None,
            completed_notes: None,
            status_id: lookups.status_id("open"),
            app_id: lookups.apps.first().map(|a| a.id).unwrap_or_default(),
            severity_id: lookups.severity_id("low"),
            lookups: lookups.clone(),
        }
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

    /// Marks the bug as completed with the given notes.
    ///
    /// Does not change the status link; combine with `.status("closed")`.
    pub fn completed(mut self, notes: impl Into<String>) -> Self {
        self.completed_at = Some(Utc::now());
        self.completed_notes = Some(notes.into());
        self
    }

    /// Links the bug to the status with the given level.
    pub fn status(mut self, level: &str) -> Self {
        self.status_id = self.lookups.status_id(level);
        self
    }

    /// Links the bug to the severity with the given level.
    pub fn severity(mut self, level: &str) -> Self {
        self.severity_id = self.lookups.severity_id(level);
        self
    }

    /// Links the bug to the app with the given name.
    pub fn app(mut self, app_name: &str) -> Self {
        self.app_id = self.lookups.app_id(app_name);
        self
    }

    /// Inserts the bug row and its status, app, and severity links.
    ///
    /// # Returns
    /// - `Ok(entity::bug::Model)` - Created bug entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bug::Model, DbErr> {
        let bug = entity::bug::ActiveModel {
            bug_name: ActiveValue::Set(self.bug_name),
            description: ActiveValue::Set(self.description),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(self.created_at),
            completed_at: ActiveValue::Set(self.completed_at),
            completed_notes: ActiveValue::Set(self.completed_notes),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::bug_status::ActiveModel {
            bug_id: ActiveValue::Set(bug.id),
            status_id: ActiveValue::Set(self.status_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::bug_app::ActiveModel {
            bug_id: ActiveValue::Set(bug.id),
            app_id: ActiveValue::Set(self.app_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::bug_severity::ActiveModel {
            bug_id: ActiveValue::Set(bug.id),
            severity_id: ActiveValue::Set(self.severity_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(bug)
    }
}

/// Creates an open, low-severity bug on the default app.
///
/// Shorthand for `BugFactory::new(db, user_id, lookups).build().await`.
pub async fn create_bug(
    db: &DatabaseConnection,
    user_id: i32,
    lookups: &Lookups,
) -> Result<entity::bug::Model, DbErr> {
    BugFactory::new(db, user_id, lookups).build().await
}
