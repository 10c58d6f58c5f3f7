use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment_thread::{CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::CurrentUser,
            validate::{ValidJson, ValidPath},
        },
        model::comment_thread::CreateCommentParams,
        service::comment_thread::CommentThreadService,
        state::AppState,
    },
};

/// Tag for grouping comment thread endpoints in OpenAPI documentation
pub static THREAD_TAG: &str = "thread";

/// Get a bug's comment thread, oldest first.
///
/// # Returns
/// - `200 OK` - Comments on the bug
/// - `404 Not Found` - No bug with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/thread/{bug_id}",
    tag = THREAD_TAG,
    params(
        ("bug_id" = i32, Path, description = "Bug ID")
    ),
    responses(
        (status = 200, description = "Comments on the bug", body = Vec<CommentDto>),
        (status = 404, description = "Bug not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_thread(
    State(state): State<AppState>,
    ValidPath(bug_id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentThreadService::new(&state.db);

    let comments = service.get_thread(bug_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            comments
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Post a comment on a bug.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `201 Created` - The stored comment
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No bug with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/thread",
    tag = THREAD_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment posted", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Bug not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ValidJson(payload): ValidJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentThreadService::new(&state.db);

    let comment = service
        .create(CreateCommentParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}
