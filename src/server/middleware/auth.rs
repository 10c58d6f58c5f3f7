//! Session-based authentication and authorization.
//!
//! `AuthGuard` resolves the session's user and checks permissions. `require_user` and
//! `require_dev` wrap it as route middleware so denied requests are answered before
//! the handler's extractors read the body. On success the user is inserted into the
//! request extensions as `CurrentUser`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    state::AppState,
};

pub enum Permission {
    /// May edit bugs, register apps, and change other users' dev flag.
    Dev,
}

/// Authenticated user attached to the request by `require_user` or `require_dev`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the user must hold; empty only requires login
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Not logged in
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Session user was deleted
    /// - `Err(AppError::AuthErr(NotDev))` - Dev permission required but not held
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Dev => {
                    if !user.dev {
                        return Err(AuthError::NotDev(user.id).into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Route middleware rejecting requests without a logged-in user.
pub async fn require_user(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Route middleware rejecting requests from users without the dev flag.
pub async fn require_dev(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Dev])
        .await?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}
