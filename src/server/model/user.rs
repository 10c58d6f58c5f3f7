//! User domain models and parameters.
//!
//! Provides the domain model for application users with their `dev` permission flag,
//! and parameter types for registration and permission changes.

use chrono::{DateTime, Utc};

use crate::model::user::{RegisterUserDto, UserDto};

/// Registered user without credential data.
///
/// The password hash stays in the data layer and never leaves the repository
/// except for login verification.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub full_name: String,
    /// Whether the user may edit bugs and manage apps.
    pub dev: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            user_name: self.user_name,
            full_name: self.full_name,
            dev: self.dev,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            full_name: entity.full_name,
            dev: entity.dev,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new user.
///
/// Carries the already hashed password; hashing happens in the service layer.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub user_name: String,
    pub full_name: String,
    pub password_hash: String,
    pub dev: bool,
}

/// Registration request with the plaintext password, before hashing.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub user_name: String,
    pub full_name: String,
    pub password: String,
}

impl RegisterUserParams {
    /// Converts the registration DTO, trimming surrounding whitespace from names.
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            user_name: dto.user_name.trim().to_string(),
            full_name: dto.full_name.trim().to_string(),
            password: dto.password,
        }
    }
}

/// Parameters for granting or revoking the `dev` flag.
#[derive(Debug, Clone)]
pub struct SetDevParams {
    pub user_id: i32,
    pub dev: bool,
}
