use axum::extract::State;
use gutcare_core::domain::{
    analysis::entities::SymptomAnalysis, assistant::ports::AssistantService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateSymptomAnalysisResponse {
    pub data: SymptomAnalysis,
}

#[utoipa::path(
    post,
    path = "/symptom-analyses/generate",
    tag = "analysis",
    summary = "Analyse every logged symptom",
    responses(
        (status = 201, body = GenerateSymptomAnalysisResponse),
        (status = 422, description = "No symptoms logged, or profile incomplete")
    )
)]
pub async fn generate_symptom_analysis(
    State(state): State<AppState>,
) -> Result<Response<GenerateSymptomAnalysisResponse>, ApiError> {
    let analysis = state
        .service
        .request_symptom_analysis()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GenerateSymptomAnalysisResponse {
        data: analysis,
    }))
}
