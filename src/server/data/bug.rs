//! Bug data repository for database operations.
//!
//! This module provides the `BugRepository` for bug rows and their status, app, and
//! severity join rows. The repository is generic over the connection so bug creation
//! and editing can run inside a transaction.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::crud::CrudRepository,
    model::bug::{BugLinkages, CreateBugParams},
};

/// Lookup ids a new bug is linked to.
#[derive(Debug, Clone, Copy)]
pub struct BugLinkIds {
    pub status_id: i32,
    pub app_id: i32,
    pub severity_id: i32,
}

pub struct BugRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BugRepository<'a, C> {
    /// Creates a new BugRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `BugRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a bug and its three join rows.
    ///
    /// Callers should run this inside a transaction so a failed link insert does not
    /// leave a bug without its status, app, or severity.
    ///
    /// # Arguments
    /// - `params` - Bug fields and reporter id
    /// - `links` - Resolved lookup ids for status, app, and severity
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted bug row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateBugParams,
        links: BugLinkIds,
    ) -> Result<entity::bug::Model, DbErr> {
        let bug = entity::bug::ActiveModel {
            bug_name: ActiveValue::Set(params.bug_name),
            description: ActiveValue::Set(params.description),
            user_id: ActiveValue::Set(params.user_id),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            completed_at: ActiveValue::Set(None),
            completed_notes: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::bug_status::ActiveModel {
            bug_id: ActiveValue::Set(bug.id),
            status_id: ActiveValue::Set(links.status_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::bug_app::ActiveModel {
            bug_id: ActiveValue::Set(bug.id),
            app_id: ActiveValue::Set(links.app_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::bug_severity::ActiveModel {
            bug_id: ActiveValue::Set(bug.id),
            severity_id: ActiveValue::Set(links.severity_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(bug)
    }

    /// Finds a bug row by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The bug row
    /// - `Ok(None)` - No bug with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, bug_id: i32) -> Result<Option<entity::bug::Model>, DbErr> {
        CrudRepository::new(self.db)
            .get_by_field::<entity::bug::Entity, _>(entity::bug::Column::Id, bug_id)
            .await
    }

    /// Gets all bug rows, oldest first.
    pub async fn find_all(&self) -> Result<Vec<entity::bug::Model>, DbErr> {
        entity::prelude::Bug::find()
            .order_by_asc(entity::bug::Column::Id)
            .all(self.db)
            .await
    }

    /// Persists the editable fields of a bug row.
    ///
    /// Writes `bug_name`, `description`, `completed_at`, and `completed_notes` in a
    /// single update. Id, reporter, and creation time are never rewritten.
    ///
    /// # Arguments
    /// - `bug` - Bug row carrying the new field values
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, bug: entity::bug::Model) -> Result<u64, DbErr> {
        let fields = entity::bug::ActiveModel {
            bug_name: ActiveValue::Set(bug.bug_name),
            description: ActiveValue::Set(bug.description),
            completed_at: ActiveValue::Set(bug.completed_at),
            completed_notes: ActiveValue::Set(bug.completed_notes),
            ..Default::default()
        };

        CrudRepository::new(self.db)
            .update_by_field(entity::bug::Column::Id, bug.id, fields)
            .await
    }

    /// Loads a bug's current status, app, and severity labels.
    ///
    /// Each label is resolved by joining the bug's join row to its lookup table.
    ///
    /// # Arguments
    /// - `bug_id` - Bug to resolve labels for
    ///
    /// # Returns
    /// - `Ok(BugLinkages)` - The three current labels
    /// - `Err(DbErr::RecordNotFound)` - A join row or its lookup row is missing
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_linkages(&self, bug_id: i32) -> Result<BugLinkages, DbErr> {
        let status = entity::prelude::BugStatus::find()
            .filter(entity::bug_status::Column::BugId.eq(bug_id))
            .find_also_related(entity::prelude::Status)
            .one(self.db)
            .await?
            .and_then(|(_, status)| status)
            .ok_or_else(|| missing_link("status", bug_id))?;

        let app = entity::prelude::BugApp::find()
            .filter(entity::bug_app::Column::BugId.eq(bug_id))
            .find_also_related(entity::prelude::App)
            .one(self.db)
            .await?
            .and_then(|(_, app)| app)
            .ok_or_else(|| missing_link("app", bug_id))?;

        let severity = entity::prelude::BugSeverity::find()
            .filter(entity::bug_severity::Column::BugId.eq(bug_id))
            .find_also_related(entity::prelude::Severity)
            .one(self.db)
            .await?
            .and_then(|(_, severity)| severity)
            .ok_or_else(|| missing_link("severity", bug_id))?;

        Ok(BugLinkages {
            status: status.level,
            app: app.app_name,
            severity: severity.level,
        })
    }

    /// Loads labels for every bug in three queries.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Labels keyed by bug id; bugs missing any join row are omitted
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_linkages(&self) -> Result<HashMap<i32, BugLinkages>, DbErr> {
        let statuses: HashMap<i32, String> = entity::prelude::BugStatus::find()
            .find_also_related(entity::prelude::Status)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(link, status)| status.map(|s| (link.bug_id, s.level)))
            .collect();

        let mut apps: HashMap<i32, String> = entity::prelude::BugApp::find()
            .find_also_related(entity::prelude::App)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(link, app)| app.map(|a| (link.bug_id, a.app_name)))
            .collect();

        let mut severities: HashMap<i32, String> = entity::prelude::BugSeverity::find()
            .find_also_related(entity::prelude::Severity)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(link, severity)| severity.map(|s| (link.bug_id, s.level)))
            .collect();

        let linkages = statuses
            .into_iter()
            .filter_map(|(bug_id, status)| {
                let app = apps.remove(&bug_id)?;
                let severity = severities.remove(&bug_id)?;
                Some((
                    bug_id,
                    BugLinkages {
                        status,
                        app,
                        severity,
                    },
                ))
            })
            .collect();

        Ok(linkages)
    }

    /// Repoints the bug's status join row.
    pub async fn set_status(&self, bug_id: i32, status_id: i32) -> Result<u64, DbErr> {
        CrudRepository::new(self.db)
            .update_field_by_bug_id::<entity::bug_status::Entity, _>(
                entity::bug_status::Column::StatusId,
                status_id,
                bug_id,
            )
            .await
    }

    /// Repoints the bug's app join row.
    pub async fn set_app(&self, bug_id: i32, app_id: i32) -> Result<u64, DbErr> {
        CrudRepository::new(self.db)
            .update_field_by_bug_id::<entity::bug_app::Entity, _>(
                entity::bug_app::Column::AppId,
                app_id,
                bug_id,
            )
            .await
    }

    /// Repoints the bug's severity join row.
    pub async fn set_severity(&self, bug_id: i32, severity_id: i32) -> Result<u64, DbErr> {
        CrudRepository::new(self.db)
            .update_field_by_bug_id::<entity::bug_severity::Entity, _>(
                entity::bug_severity::Column::SeverityId,
                severity_id,
                bug_id,
            )
            .await
    }
}

fn missing_link(kind: &str, bug_id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("No {} linked to bug {}", kind, bug_id))
}
