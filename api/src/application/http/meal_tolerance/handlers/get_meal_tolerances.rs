use axum::extract::{Query, State};
use gutcare_core::domain::meal::entities::MealTolerance;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, list_params::ListParams, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMealTolerancesResponse {
    pub data: Vec<MealTolerance>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "meal-tolerance",
    summary = "List food tolerance records",
    params(ListParams),
    responses(
        (status = 200, body = GetMealTolerancesResponse)
    )
)]
pub async fn get_meal_tolerances(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response<GetMealTolerancesResponse>, ApiError> {
    Ok(Response::OK(GetMealTolerancesResponse {
        data: params.apply(state.service.health_store().meal_tolerances()),
    }))
}
