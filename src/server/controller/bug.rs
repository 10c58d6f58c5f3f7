use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        bug::{
            AppDto, BugDto, CreateAppDto, CreateBugDto, EditBugDto, EditBugResponseDto,
            LookupsDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::CurrentUser,
            validate::{ValidJson, ValidPath},
        },
        model::{
            bug::{CreateBugParams, EditBugParams},
            lookup::CreateAppParams,
        },
        service::bug::BugService,
        state::AppState,
    },
};

/// Tag for grouping bug endpoints in OpenAPI documentation
pub static BUG_TAG: &str = "bug";

/// List all bugs.
///
/// Returns every bug with its current status, app, and severity, oldest first.
///
/// # Returns
/// - `200 OK` - List of bugs
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bugs",
    tag = BUG_TAG,
    responses(
        (status = 200, description = "All bugs", body = Vec<BugDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bugs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BugService::new(&state.db);

    let bugs = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(bugs.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a single bug.
///
/// # Returns
/// - `200 OK` - The bug
/// - `404 Not Found` - No bug with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bugs/{bug_id}",
    tag = BUG_TAG,
    params(
        ("bug_id" = i32, Path, description = "Bug ID")
    ),
    responses(
        (status = 200, description = "The bug", body = BugDto),
        (status = 404, description = "Bug not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bug(
    State(state): State<AppState>,
    ValidPath(bug_id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BugService::new(&state.db);

    let bug = service.get_by_id(bug_id).await?;

    Ok((StatusCode::OK, Json(bug.into_dto())))
}

/// Report a new bug.
///
/// The bug starts with status `open` and is attributed to the logged-in user.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `201 Created` - The created bug
/// - `400 Bad Request` - Invalid body or unknown app/severity label
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bugs",
    tag = BUG_TAG,
    request_body = CreateBugDto,
    responses(
        (status = 201, description = "Bug created", body = BugDto),
        (status = 400, description = "Invalid bug data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bug(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ValidJson(payload): ValidJson<CreateBugDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BugService::new(&state.db);

    let params = CreateBugParams::from_dto(user.id, payload);

    let bug = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(bug.into_dto())))
}

/// Edit a bug.
///
/// Updates only the fields and labels that differ from the stored bug. Completion
/// notes may only be recorded together with status `closed`, which also stamps the
/// completion time.
///
/// # Access Control
/// - `Dev` - Only dev users can edit bugs; checked before the body is read
///
/// # Returns
/// - `200 OK` - `{"editBug": bug}` with the bug after the edit
/// - `400 Bad Request` - Invalid body or unknown status/app/severity label
/// - `401 Unauthorized` - Not a dev, or notes given without status `closed`
/// - `404 Not Found` - No bug with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/bugs/{bug_id}",
    tag = BUG_TAG,
    params(
        ("bug_id" = i32, Path, description = "Bug ID")
    ),
    request_body = EditBugDto,
    responses(
        (status = 200, description = "Bug edited", body = EditBugResponseDto),
        (status = 400, description = "Invalid edit data", body = ErrorDto),
        (status = 401, description = "Not a dev, or completion notes without closing", body = ErrorDto),
        (status = 404, description = "Bug not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_bug(
    State(state): State<AppState>,
    ValidPath(bug_id): ValidPath<i32>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ValidJson(payload): ValidJson<EditBugDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BugService::new(&state.db);

    let params = EditBugParams::from_dto(bug_id, payload);

    let edited = service.edit(params).await?;

    tracing::info!(
        "Bug {} edited by {} ({} field(s), {} link(s))",
        bug_id,
        user.user_name,
        edited.fields_changed,
        edited.links_changed
    );

    Ok((
        StatusCode::OK,
        Json(EditBugResponseDto {
            edit_bug: edited.bug.into_dto(),
        }),
    ))
}

/// Get the labels accepted for status, severity, and app.
///
/// # Returns
/// - `200 OK` - All lookup labels
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bugs/lookups",
    tag = BUG_TAG,
    responses(
        (status = 200, description = "Lookup labels", body = LookupsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lookups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BugService::new(&state.db);

    let lookups = service.get_lookups().await?;

    Ok((StatusCode::OK, Json(lookups.into_dto())))
}

/// Register a new app bugs can be filed against.
///
/// # Access Control
/// - `Dev` - Only dev users can add apps
///
/// # Returns
/// - `201 Created` - The created app
/// - `400 Bad Request` - Invalid body or duplicate app name
/// - `401 Unauthorized` - Not a dev
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bugs/apps",
    tag = BUG_TAG,
    request_body = CreateAppDto,
    responses(
        (status = 201, description = "App created", body = AppDto),
        (status = 400, description = "Invalid or duplicate app", body = ErrorDto),
        (status = 401, description = "Not a dev", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_app(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateAppDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BugService::new(&state.db);

    let app = service.create_app(CreateAppParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(app.into_dto())))
}
