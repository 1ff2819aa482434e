use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    delete,
    path = "/symptom-analyses/{id}",
    tag = "analysis",
    summary = "Delete a symptom analysis",
    params(("id" = Uuid, Path, description = "Analysis id")),
    responses(
        (status = 204, description = "Analysis deleted"),
        (status = 404, description = "Analysis not found")
    )
)]
pub async fn delete_symptom_analysis(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .service
        .health_store()
        .remove_symptom_analysis(id)
        .map_err(ApiError::from)?;

    removed
        .then_some(StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiError::NotFound(format!("symptom analysis {id} not found")))
}

#[utoipa::path(
    delete,
    path = "/food-analyses/{id}",
    tag = "analysis",
    summary = "Delete a food analysis",
    params(("id" = Uuid, Path, description = "Analysis id")),
    responses(
        (status = 204, description = "Analysis deleted"),
        (status = 404, description = "Analysis not found")
    )
)]
pub async fn delete_food_analysis(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .service
        .health_store()
        .remove_food_analysis(id)
        .map_err(ApiError::from)?;

    removed
        .then_some(StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiError::NotFound(format!("food analysis {id} not found")))
}
