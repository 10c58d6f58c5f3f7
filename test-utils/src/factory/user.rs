//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored in the password column when a test never logs in.
pub const DEFAULT_PASSWORD_HASH: &str = "not-a-password-hash";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .user_name("reporter")
///     .dev(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_name: String,
    full_name: String,
    password: String,
    dev: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_name: `"user_{id}"` where id is auto-incremented
    /// - full_name: `"User {id}"`
    /// - password: `DEFAULT_PASSWORD_HASH`
    /// - dev: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_name: format!("user_{}", id),
            full_name: format!("User {}", id),
            password: DEFAULT_PASSWORD_HASH.to_string(),
            dev: false,
        }
    }

    /// Sets the login name for the user.
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Sets the display name for the user.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the stored password hash.
    ///
    /// The value is written as-is, so tests exercising login must pass a real
    /// PHC-format hash.
    pub fn password_hash(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets whether the user may edit bugs.
    pub fn dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            user_name: ActiveValue::Set(self.user_name),
            full_name: ActiveValue::Set(self.full_name),
            password: ActiveValue::Set(self.password),
            dev: ActiveValue::Set(self.dev),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-dev user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a dev user with default values.
///
/// Shorthand for `UserFactory::new(db).dev(true).build().await`.
pub async fn create_dev(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).dev(true).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.user_name.is_empty());
        assert!(!user.full_name.is_empty());
        assert!(!user.dev);

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .user_name("maintainer")
            .full_name("Main Tainer")
            .dev(true)
            .build()
            .await?;

        assert_eq!(user.user_name, "maintainer");
        assert_eq!(user.full_name, "Main Tainer");
        assert!(user.dev);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.id, user2.id);
        assert_ne!(user1.user_name, user2.user_name);

        Ok(())
    }
}
