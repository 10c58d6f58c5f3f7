use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request body or path rejected before reaching a handler.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Body or path parameters failed to deserialize.
    #[error("{0}")]
    Malformed(String),

    /// A required string field is empty or only whitespace.
    #[error("'{0}' must not be empty")]
    EmptyField(&'static str),

    /// A string field exceeds its maximum length.
    #[error("'{field}' must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// A string field is shorter than its minimum length.
    #[error("'{field}' must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
