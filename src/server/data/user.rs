//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles registration, lookups, and dev flag management with conversion between
//! entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::crud::CrudRepository,
    model::user::{CreateUserParams, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - User fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on a taken user name
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            user_name: ActiveValue::Set(params.user_name),
            full_name: ActiveValue::Set(params.full_name),
            password: ActiveValue::Set(params.password_hash),
            dev: ActiveValue::Set(params.dev),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = CrudRepository::new(self.db)
            .get_by_field::<entity::user::Entity, _>(entity::user::Column::Id, user_id)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their stored password hash by user name.
    ///
    /// Only login should need the hash.
    ///
    /// # Returns
    /// - `Ok(Some((User, hash)))` - User found
    /// - `Ok(None)` - No user with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials(
        &self,
        user_name: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = CrudRepository::new(self.db)
            .get_by_field::<entity::user::Entity, _>(entity::user::Column::UserName, user_name)
            .await?;

        Ok(entity.map(|e| {
            let password_hash = e.password.clone();
            (User::from_entity(e), password_hash)
        }))
    }

    /// Checks whether a user name is taken.
    pub async fn user_name_exists(&self, user_name: &str) -> Result<bool, DbErr> {
        let entity = CrudRepository::new(self.db)
            .get_by_field::<entity::user::Entity, _>(entity::user::Column::UserName, user_name)
            .await?;

        Ok(entity.is_some())
    }

    /// Sets the `dev` flag if the user has the lowest id in the table.
    ///
    /// Check and write are one statement, so of several users registering at once only
    /// the first inserted is promoted.
    ///
    /// # Returns
    /// - `Ok(true)` - User is the first and was promoted
    /// - `Ok(false)` - Another user registered earlier
    /// - `Err(DbErr)` - Database error during update
    pub async fn promote_if_first(&self, user_id: i32) -> Result<bool, DbErr> {
        let first_id = Query::select()
            .expr(Func::min(Expr::col(entity::user::Column::Id)))
            .from(entity::user::Entity)
            .to_owned();

        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Dev, Expr::value(true))
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::Id.in_subquery(first_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets all users ordered by user name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::UserName)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Grants or revokes the `dev` flag.
    ///
    /// # Arguments
    /// - `user_id` - User to modify
    /// - `dev` - New value of the flag
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated (0 if the user does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_dev(&self, user_id: i32, dev: bool) -> Result<u64, DbErr> {
        CrudRepository::new(self.db)
            .update_by_field(
                entity::user::Column::Id,
                user_id,
                entity::user::ActiveModel {
                    dev: ActiveValue::Set(dev),
                    ..Default::default()
                },
            )
            .await
    }
}
