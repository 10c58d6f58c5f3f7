//! Request extraction with field validation.
//!
//! `ValidJson<T>` deserializes the request body like `axum::Json` and then runs
//! `T::validate`. `ValidPath<T>` deserializes path parameters like `axum::extract::Path`.
//! Failures are answered with a 400 JSON error before the handler runs.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    model::{
        bug::{CreateAppDto, CreateBugDto, EditBugDto},
        comment_thread::CreateCommentDto,
        user::{LoginDto, RegisterUserDto, SetDevDto},
    },
    server::error::{validation::ValidationError, AppError},
};

const MAX_NAME_LEN: usize = 100;
const MAX_TEXT_LEN: usize = 5000;
const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 128;

/// Field-level checks run after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// JSON extractor that rejects bodies failing `Validate`.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::Malformed(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}

/// Path extractor whose rejections use the JSON error shape.
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::Malformed(rejection.body_text()))?;

        Ok(Self(value))
    }
}

fn required(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

impl Validate for CreateBugDto {
    fn validate(&self) -> Result<(), ValidationError> {
        required("bug_name", &self.bug_name, MAX_NAME_LEN)?;
        required("description", &self.description, MAX_TEXT_LEN)?;
        required("app", &self.app, MAX_NAME_LEN)?;
        required("severity", &self.severity, MAX_NAME_LEN)
    }
}

impl Validate for EditBugDto {
    fn validate(&self) -> Result<(), ValidationError> {
        required("bug_name", &self.bug_name, MAX_NAME_LEN)?;
        required("description", &self.description, MAX_TEXT_LEN)?;
        required("status", &self.status, MAX_NAME_LEN)?;
        required("app", &self.app, MAX_NAME_LEN)?;
        required("severity", &self.severity, MAX_NAME_LEN)?;

        match &self.completed_notes {
            Some(notes) if notes.chars().count() > MAX_TEXT_LEN => Err(ValidationError::TooLong {
                field: "completed_notes",
                max: MAX_TEXT_LEN,
            }),
            _ => Ok(()),
        }
    }
}

impl Validate for CreateAppDto {
    fn validate(&self) -> Result<(), ValidationError> {
        required("app_name", &self.app_name, MAX_NAME_LEN)
    }
}

impl Validate for CreateCommentDto {
    fn validate(&self) -> Result<(), ValidationError> {
        required("comment", &self.comment, MAX_TEXT_LEN)
    }
}

impl Validate for RegisterUserDto {
    fn validate(&self) -> Result<(), ValidationError> {
        required("user_name", &self.user_name, MAX_NAME_LEN)?;
        required("full_name", &self.full_name, MAX_NAME_LEN)?;
        required("password", &self.password, MAX_PASSWORD_LEN)?;

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::TooShort {
                field: "password",
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

impl Validate for LoginDto {
    fn validate(&self) -> Result<(), ValidationError> {
        required("user_name", &self.user_name, MAX_NAME_LEN)?;
        required("password", &self.password, MAX_PASSWORD_LEN)
    }
}

impl Validate for SetDevDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
