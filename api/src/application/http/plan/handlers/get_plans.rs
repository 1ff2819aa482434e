use axum::extract::{Query, State};
use gutcare_core::domain::plan::entities::{FitnessPlan, HealthPlan, NutritionPlan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, list_params::ListParams, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHealthPlansResponse {
    pub data: Vec<HealthPlan>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetNutritionPlansResponse {
    pub data: Vec<NutritionPlan>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFitnessPlansResponse {
    pub data: Vec<FitnessPlan>,
}

#[utoipa::path(
    get,
    path = "/health-plans",
    tag = "plan",
    summary = "List plan cards",
    params(ListParams),
    responses(
        (status = 200, body = GetHealthPlansResponse)
    )
)]
pub async fn get_health_plans(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response<GetHealthPlansResponse>, ApiError> {
    Ok(Response::OK(GetHealthPlansResponse {
        data: params.apply(state.service.health_store().health_plans()),
    }))
}

#[utoipa::path(
    get,
    path = "/nutrition-plans",
    tag = "plan",
    summary = "List nutrition plans",
    params(ListParams),
    responses(
        (status = 200, body = GetNutritionPlansResponse)
    )
)]
pub async fn get_nutrition_plans(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response<GetNutritionPlansResponse>, ApiError> {
    Ok(Response::OK(GetNutritionPlansResponse {
        data: params.apply(state.service.health_store().nutrition_plans()),
    }))
}

#[utoipa::path(
    get,
    path = "/fitness-plans",
    tag = "plan",
    summary = "List fitness plans",
    params(ListParams),
    responses(
        (status = 200, body = GetFitnessPlansResponse)
    )
)]
pub async fn get_fitness_plans(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response<GetFitnessPlansResponse>, ApiError> {
    Ok(Response::OK(GetFitnessPlansResponse {
        data: params.apply(state.service.health_store().fitness_plans()),
    }))
}
