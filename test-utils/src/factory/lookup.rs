//! Lookup factories for status, severity, and app rows.
//!
//! Test databases are built from entity definitions rather than migrations, so the
//! seed rows the migrations insert are not present. These factories create them.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Status levels seeded by the migrations.
pub const STATUS_LEVELS: [&str; 3] = ["open", "in progress", "closed"];

/// Severity levels seeded by the migrations.
pub const SEVERITY_LEVELS: [&str; 4] = ["low", "medium", "high", "critical"];

/// App created by `create_default_lookups`.
pub const DEFAULT_APP: &str = "web";

/// The lookup rows created by `create_default_lookups`.
#[derive(Debug, Clone)]
pub struct Lookups {
    pub statuses: Vec<entity::status::Model>,
    pub severities: Vec<entity::severity::Model>,
    pub apps: Vec<entity::app::Model>,
}

impl Lookups {
    /// Id of the status with the given level.
    ///
    /// # Panics
    /// Panics if the level was not created; intended for test setup only.
    pub fn status_id(&self, level: &str) -> i32 {
        self.statuses
            .iter()
            .find(|s| s.level == level)
            .map(|s| s.id)
            .unwrap_or_else(|| panic!("status '{}' not seeded", level))
    }

    /// Id of the severity with the given level.
    ///
    /// # Panics
    /// Panics if the level was not created; intended for test setup only.
    pub fn severity_id(&self, level: &str) -> i32 {
        self.severities
            .iter()
            .find(|s| s.level == level)
            .map(|s| s.id)
            .unwrap_or_else(|| panic!("severity '{}' not seeded", level))
    }

    /// Id of the app with the given name.
    ///
    /// # Panics
    /// Panics if the app was not created; intended for test setup only.
    pub fn app_id(&self, app_name: &str) -> i32 {
        self.apps
            .iter()
            .find(|a| a.app_name == app_name)
            .map(|a| a.id)
            .unwrap_or_else(|| panic!("app '{}' not seeded", app_name))
    }
}

/// Creates a status row.
pub async fn create_status(
    db: &DatabaseConnection,
    level: impl Into<String>,
) -> Result<entity::status::Model, DbErr> {
    entity::status::ActiveModel {
        level: ActiveValue::Set(level.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a severity row.
pub async fn create_severity(
    db: &DatabaseConnection,
    level: impl Into<String>,
) -> Result<entity::severity::Model, DbErr> {
    entity::severity::ActiveModel {
        level: ActiveValue::Set(level.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an app row.
pub async fn create_app(
    db: &DatabaseConnection,
    app_name: impl Into<String>,
) -> Result<entity::app::Model, DbErr> {
    entity::app::ActiveModel {
        app_name: ActiveValue::Set(app_name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Seeds the statuses and severities the migrations create, plus `DEFAULT_APP`.
///
/// # Returns
/// - `Ok(Lookups)` - Every created lookup row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_default_lookups(db: &DatabaseConnection) -> Result<Lookups, DbErr> {
    let mut statuses = Vec::with_capacity(STATUS_LEVELS.len());
    for level in STATUS_LEVELS {
        statuses.push(create_status(db, level).await?);
    }

    let mut severities = Vec::with_capacity(SEVERITY_LEVELS.len());
    for level in SEVERITY_LEVELS {
        severities.push(create_severity(db, level).await?);
    }

    let apps = vec![create_app(db, DEFAULT_APP).await?];

    Ok(Lookups {
        statuses,
        severities,
        apps,
    })
}
