//! Lookup data repository for statuses, severities, and apps.
//!
//! Statuses and severities are seeded by migrations. Apps are added by dev users.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    data::crud::CrudRepository,
    model::lookup::{App, CreateAppParams},
};

pub struct LookupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LookupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves a status label to its id.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - Status exists
    /// - `Ok(None)` - No status with that label
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_status_id(&self, level: &str) -> Result<Option<i32>, DbErr> {
        let status = CrudRepository::new(self.db)
            .get_by_field::<entity::status::Entity, _>(entity::status::Column::Level, level)
            .await?;

        Ok(status.map(|s| s.id))
    }

    /// Resolves a severity label to its id.
    pub async fn find_severity_id(&self, level: &str) -> Result<Option<i32>, DbErr> {
        let severity = CrudRepository::new(self.db)
            .get_by_field::<entity::severity::Entity, _>(entity::severity::Column::Level, level)
            .await?;

        Ok(severity.map(|s| s.id))
    }

    /// Resolves an app name to its id.
    pub async fn find_app_id(&self, app_name: &str) -> Result<Option<i32>, DbErr> {
        let app = CrudRepository::new(self.db)
            .get_by_field::<entity::app::Entity, _>(entity::app::Column::AppName, app_name)
            .await?;

        Ok(app.map(|a| a.id))
    }

    /// Gets all status labels in seed order.
    pub async fn get_statuses(&self) -> Result<Vec<String>, DbErr> {
        let statuses = entity::prelude::Status::find()
            .order_by_asc(entity::status::Column::Id)
            .all(self.db)
            .await?;

        Ok(statuses.into_iter().map(|s| s.level).collect())
    }

    /// Gets all severity labels in seed order.
    pub async fn get_severities(&self) -> Result<Vec<String>, DbErr> {
        let severities = entity::prelude::Severity::find()
            .order_by_asc(entity::severity::Column::Id)
            .all(self.db)
            .await?;

        Ok(severities.into_iter().map(|s| s.level).collect())
    }

    /// Gets all apps ordered by name.
    pub async fn get_apps(&self) -> Result<Vec<App>, DbErr> {
        let apps = entity::prelude::App::find()
            .order_by_asc(entity::app::Column::AppName)
            .all(self.db)
            .await?;

        Ok(apps.into_iter().map(App::from_entity).collect())
    }

    /// Inserts a new app.
    ///
    /// # Returns
    /// - `Ok(App)` - The created app
    /// - `Err(DbErr)` - Database error, including a unique violation on a duplicate name
    pub async fn create_app(&self, params: CreateAppParams) -> Result<App, DbErr> {
        let app = entity::app::ActiveModel {
            app_name: ActiveValue::Set(params.app_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(App::from_entity(app))
    }
}
