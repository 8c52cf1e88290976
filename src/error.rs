use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::modules::product::generator::GenerationError;
use crate::modules::product::schema::{DetailResponse, FieldErrors, MessageResponse};

/// Errors surfaced at the HTTP boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MalformedBody(detail) => {
                (StatusCode::BAD_REQUEST, Json(DetailResponse { detail })).into_response()
            }
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            ApiError::Generation(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse { message: e.to_string() }),
            )
                .into_response(),
        }
    }
}
