use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::ErrorDto;

/// Plain-text liveness greeting.
pub async fn root() -> &'static str {
    "Bug tracker API is running"
}

/// Fallback for unmatched paths.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}
