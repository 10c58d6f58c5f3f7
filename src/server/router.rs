//! Route table, middleware stack, and OpenAPI document.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{
        header::{self, HeaderName, HeaderValue},
        Method, Request,
    },
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use tracing::{info_span, Span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        bug::{
            AppDto, BugDto, CreateAppDto, CreateBugDto, EditBugDto, EditBugResponseDto,
            LookupsDto,
        },
        comment_thread::{CommentDto, CreateCommentDto},
        user::{LoginDto, RegisterUserDto, SetDevDto, UserDto},
    },
    server::{
        controller::{bug, comment_thread, root, user},
        middleware::auth::{require_dev, require_user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bug Tracker API", description = "Bugs, comment threads, and users"),
    paths(
        bug::get_bugs,
        bug::get_bug,
        bug::create_bug,
        bug::edit_bug,
        bug::get_lookups,
        bug::create_app,
        comment_thread::get_thread,
        comment_thread::create_comment,
        user::register,
        user::login,
        user::logout,
        user::get_current_user,
        user::get_users,
        user::set_dev,
    ),
    components(schemas(
        ErrorDto,
        BugDto,
        CreateBugDto,
        EditBugDto,
        EditBugResponseDto,
        LookupsDto,
        AppDto,
        CreateAppDto,
        CommentDto,
        CreateCommentDto,
        UserDto,
        RegisterUserDto,
        LoginDto,
        SetDevDto,
    )),
    tags(
        (name = "bug", description = "Bug reports and lookup labels"),
        (name = "thread", description = "Comment threads on bugs"),
        (name = "user", description = "Accounts, sessions, and dev permissions"),
    )
)]
pub struct ApiDoc;

/// API routes with per-method access control.
///
/// `require_user` and `require_dev` run as route layers, so a denied request never
/// reaches the handler's body extractor.
pub fn router(state: AppState) -> Router<AppState> {
    let user_only = || middleware::from_fn_with_state(state.clone(), require_user);
    let dev_only = || middleware::from_fn_with_state(state.clone(), require_dev);

    Router::new()
        .route("/", get(root::root))
        .route(
            "/api/bugs",
            get(bug::get_bugs).merge(post(bug::create_bug).route_layer(user_only())),
        )
        .route("/api/bugs/lookups", get(bug::get_lookups))
        .route(
            "/api/bugs/apps",
            post(bug::create_app).route_layer(dev_only()),
        )
        .route(
            "/api/bugs/{bug_id}",
            get(bug::get_bug).merge(patch(bug::edit_bug).route_layer(dev_only())),
        )
        .route("/api/thread/{bug_id}", get(comment_thread::get_thread))
        .route(
            "/api/thread",
            post(comment_thread::create_comment).route_layer(user_only()),
        )
        .route(
            "/api/users",
            post(user::register).merge(get(user::get_users).route_layer(user_only())),
        )
        .route("/api/users/login", post(user::login))
        .route("/api/users/logout", post(user::logout))
        .route(
            "/api/users/me",
            get(user::get_current_user).route_layer(user_only()),
        )
        .route(
            "/api/users/{user_id}/dev",
            put(user::set_dev).route_layer(dev_only()),
        )
}

/// Assembles the full application: routes, docs, and the middleware stack.
///
/// # Arguments
/// - `state` - Shared application state
/// - `cors_origin` - The single origin allowed to make credentialed requests
/// - `session_layer` - Session manager wrapping all routes
pub fn app(
    state: AppState,
    cors_origin: HeaderValue,
    session_layer: SessionManagerLayer<SqliteStore>,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    router(state.clone())
        .fallback(root::not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(session_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .layer(security_header(
            header::X_CONTENT_TYPE_OPTIONS,
            "nosniff",
        ))
        .layer(security_header(header::X_FRAME_OPTIONS, "SAMEORIGIN"))
        .layer(security_header(header::REFERRER_POLICY, "no-referrer"))
        .layer(security_header(
            HeaderName::from_static("cross-origin-resource-policy"),
            "same-origin",
        ))
        .layer(security_header(
            HeaderName::from_static("x-dns-prefetch-control"),
            "off",
        ))
}

fn security_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
}

fn make_span(request: &Request<Body>) -> Span {
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
    )
}
