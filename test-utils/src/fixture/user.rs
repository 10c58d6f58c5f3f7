//! User fixtures for creating in-memory test data.

use chrono::Utc;
use entity::user;

/// Default test user name.
pub const DEFAULT_USER_NAME: &str = "tester";

/// Creates a non-dev user entity model with default values.
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    user_name: String,
    dev: bool,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            user_name: DEFAULT_USER_NAME.to_string(),
            dev: false,
        }
    }
}

impl UserEntityBuilder {
    /// Sets the user ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the login name.
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Sets the dev flag.
    pub fn dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            full_name: format!("{} (fixture)", self.user_name),
            user_name: self.user_name,
            password: crate::factory::user::DEFAULT_PASSWORD_HASH.to_string(),
            dev: self.dev,
            created_at: Utc::now(),
        }
    }
}
