use axum::extract::{Query, State};
use gutcare_core::domain::meal::entities::Meal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, list_params::ListParams, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMealsResponse {
    pub data: Vec<Meal>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "meal",
    summary = "List logged meals",
    params(ListParams),
    responses(
        (status = 200, body = GetMealsResponse)
    )
)]
pub async fn get_meals(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response<GetMealsResponse>, ApiError> {
    Ok(Response::OK(GetMealsResponse {
        data: params.apply(state.service.health_store().meals()),
    }))
}
