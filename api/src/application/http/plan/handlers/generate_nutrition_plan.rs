use axum::extract::State;
use gutcare_core::domain::{assistant::ports::AssistantService, plan::entities::NutritionPlan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateNutritionPlanResponse {
    pub data: NutritionPlan,
}

#[utoipa::path(
    post,
    path = "/nutrition-plans/generate",
    tag = "plan",
    summary = "Generate a nutrition plan from the profile",
    description = "Falls back to a built-in plan when the AI service is unavailable or its reply cannot be parsed.",
    responses(
        (status = 201, body = GenerateNutritionPlanResponse),
        (status = 422, description = "Profile is missing disease or age")
    )
)]
pub async fn generate_nutrition_plan(
    State(state): State<AppState>,
) -> Result<Response<GenerateNutritionPlanResponse>, ApiError> {
    let plan = state
        .service
        .request_nutrition_plan()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GenerateNutritionPlanResponse { data: plan }))
}
