use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the request's session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// # Fields
    /// - User id read from the session
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// User attempted a dev-only action without the `dev` flag.
    ///
    /// # Fields
    /// - Id of the requesting user
    #[error("User {0} is not a dev")]
    NotDev(i32),

    /// Completion notes were supplied for a bug whose target status is not `closed`.
    #[error("Status must be 'closed'")]
    CompletionRequiresClosed,

    /// User name unknown or password mismatch on login.
    #[error("Invalid user name or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant results in 401 Unauthorized. Denials are logged at debug level with
/// the full reason while the client receives a short message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => "Not authenticated",
            Self::NotDev(_) => "Unauthorized edit request",
            Self::CompletionRequiresClosed => "Status must be 'closed'",
            Self::InvalidCredentials => "Invalid user name or password",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
