use axum::extract::{Query, State};
use gutcare_core::domain::symptom::entities::Symptom;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, list_params::ListParams, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSymptomsResponse {
    pub data: Vec<Symptom>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "symptom",
    summary = "List logged symptoms",
    params(ListParams),
    responses(
        (status = 200, body = GetSymptomsResponse)
    )
)]
pub async fn get_symptoms(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response<GetSymptomsResponse>, ApiError> {
    Ok(Response::OK(GetSymptomsResponse {
        data: params.apply(state.service.health_store().symptoms()),
    }))
}
