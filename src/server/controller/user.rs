use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterUserDto, SetDevDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::CurrentUser,
            session::AuthSession,
            validate::{ValidJson, ValidPath},
        },
        model::user::{RegisterUserParams, SetDevParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// The first account ever registered is made a dev.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid body or user name taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid data or user name taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in and start a session.
///
/// # Returns
/// - `200 OK` - The logged-in user; the response sets the session cookie
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Unknown user name or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidJson(payload): ValidJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.login(&payload.user_name, &payload.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::debug!("User {} logged in", user.user_name);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// End the current session.
///
/// # Returns
/// - `204 No Content` - Session cleared (also when no one was logged in)
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    post,
    path = "/api/users/logout",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged-in user.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List all users ordered by user name.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `200 OK` - All users
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Grant or revoke a user's dev flag.
///
/// # Access Control
/// - `Dev` - Only dev users can change the flag
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Not a dev
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/dev",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = SetDevDto,
    responses(
        (status = 200, description = "Dev flag updated", body = UserDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Not a dev", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_dev(
    State(state): State<AppState>,
    ValidPath(user_id): ValidPath<i32>,
    ValidJson(payload): ValidJson<SetDevDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .set_dev(SetDevParams {
            user_id,
            dev: payload.dev,
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
