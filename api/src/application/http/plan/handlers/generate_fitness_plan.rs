use axum::extract::State;
use gutcare_core::domain::{assistant::ports::AssistantService, plan::entities::FitnessPlan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateFitnessPlanResponse {
    pub data: FitnessPlan,
}

#[utoipa::path(
    post,
    path = "/fitness-plans/generate",
    tag = "plan",
    summary = "Generate a fitness plan from the profile",
    responses(
        (status = 201, body = GenerateFitnessPlanResponse),
        (status = 422, description = "Profile is missing disease or age")
    )
)]
pub async fn generate_fitness_plan(
    State(state): State<AppState>,
) -> Result<Response<GenerateFitnessPlanResponse>, ApiError> {
    let plan = state
        .service
        .request_fitness_plan()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GenerateFitnessPlanResponse { data: plan }))
}
