//! Type-safe session management wrapper.
//!
//! `AuthSession` wraps the request's `Session` and exposes only the operations needed
//! for login state, preventing typos in session keys and keeping the stored type
//! consistent.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state including storing and retrieving the
/// authenticated user's id and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after successful login to establish a logged-in session. The session id
    /// is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the user
    ///
    /// # Returns
    /// - `Ok(())` - User id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Removes all data from the session and deletes it from the store.
    ///
    /// Used during logout.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::context::TestContext;

    /// Tests storing and reading back the user id.
    ///
    /// Expected: Some(id) after set, None after clear
    #[tokio::test]
    async fn stores_and_clears_user_id() -> Result<(), AppError> {
        let mut test = TestContext::new();
        let session = test.session().await.unwrap();
        let auth_session = AuthSession::new(session);

        assert_eq!(auth_session.get_user_id().await?, None);

        auth_session.set_user_id(42).await?;
        assert_eq!(auth_session.get_user_id().await?, Some(42));

        auth_session.clear().await?;
        assert_eq!(auth_session.get_user_id().await?, None);

        Ok(())
    }
}
