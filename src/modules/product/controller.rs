use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use tracing::{error, warn};

use crate::error::ApiError;
use crate::modules::product::{
    generator::ProductGenerator,
    schema::{GenerateProductRequest, GenerationResult},
};
use crate::AppState;

pub async fn generate_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerationResult>, ApiError> {
    let Json(body) = payload.map_err(|e| {
        warn!(error = %e, "rejected malformed request body");
        ApiError::MalformedBody(e.body_text())
    })?;

    let payload = GenerateProductRequest::from_body(body).map_err(|detail| {
        warn!(error = %detail, "rejected request body");
        ApiError::MalformedBody(detail)
    })?;

    let request = payload.into_generation_request().map_err(|errors| {
        warn!(fields = ?errors.keys().collect::<Vec<_>>(), "rejected invalid request");
        ApiError::Validation(errors)
    })?;

    let generator = ProductGenerator::new(state.chat.as_ref(), &state.params);

    let result = generator.generate(&request).await.map_err(|e| {
        error!(error = %e, "product generation failed");
        ApiError::Generation(e)
    })?;

    Ok(Json(result))
}
