use axum::extract::State;
use gutcare_core::domain::{analysis::entities::FoodAnalysis, assistant::ports::AssistantService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::GenerateFoodAnalysisValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateFoodAnalysisResponse {
    pub data: FoodAnalysis,
}

#[utoipa::path(
    post,
    path = "/food-analyses/generate",
    tag = "analysis",
    summary = "Estimate calories and nutrients for a food",
    description = "Without a usable AI reply the estimate comes from the offline calorie table.",
    request_body = GenerateFoodAnalysisValidator,
    responses(
        (status = 201, body = GenerateFoodAnalysisResponse),
        (status = 400, description = "Missing food name or amount")
    )
)]
pub async fn generate_food_analysis(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateFoodAnalysisValidator>,
) -> Result<Response<GenerateFoodAnalysisResponse>, ApiError> {
    let analysis = state
        .service
        .request_food_analysis(payload.food_name, payload.amount)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GenerateFoodAnalysisResponse {
        data: analysis,
    }))
}
