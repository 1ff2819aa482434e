use axum::extract::{Query, State};
use gutcare_core::domain::analysis::entities::{FoodAnalysis, SymptomAnalysis};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, list_params::ListParams, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSymptomAnalysesResponse {
    pub data: Vec<SymptomAnalysis>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFoodAnalysesResponse {
    pub data: Vec<FoodAnalysis>,
}

#[utoipa::path(
    get,
    path = "/symptom-analyses",
    tag = "analysis",
    summary = "List symptom analyses",
    params(ListParams),
    responses(
        (status = 200, body = GetSymptomAnalysesResponse)
    )
)]
pub async fn get_symptom_analyses(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response<GetSymptomAnalysesResponse>, ApiError> {
    Ok(Response::OK(GetSymptomAnalysesResponse {
        data: params.apply(state.service.health_store().symptom_analyses()),
    }))
}

#[utoipa::path(
    get,
    path = "/food-analyses",
    tag = "analysis",
    summary = "List food analyses",
    params(ListParams),
    responses(
        (status = 200, body = GetFoodAnalysesResponse)
    )
)]
pub async fn get_food_analyses(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response<GetFoodAnalysesResponse>, ApiError> {
    Ok(Response::OK(GetFoodAnalysesResponse {
        data: params.apply(state.service.health_store().food_analyses()),
    }))
}
