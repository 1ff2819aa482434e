use axum::extract::State;
use gutcare_core::domain::assistant::ports::AssistantService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ai::validators::ToleranceAdviceValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ToleranceAdviceResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/tolerance",
    tag = "ai",
    summary = "Advice for a food based on its tolerance history",
    request_body = ToleranceAdviceValidator,
    responses(
        (status = 200, body = ToleranceAdviceResponse),
        (status = 400, description = "Missing food name")
    )
)]
pub async fn get_tolerance_advice(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ToleranceAdviceValidator>,
) -> Result<Response<ToleranceAdviceResponse>, ApiError> {
    let advice = state
        .service
        .request_tolerance_advice(payload.food_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToleranceAdviceResponse { data: advice }))
}
