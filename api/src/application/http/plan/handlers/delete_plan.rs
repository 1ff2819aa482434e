use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use gutcare_core::domain::common::entities::app_errors::CoreError;
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

fn removed_or_not_found(
    result: Result<bool, CoreError>,
    id: Uuid,
) -> Result<StatusCode, ApiError> {
    match result {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ApiError::NotFound(format!("plan {id} not found"))),
        Err(e) => Err(ApiError::from(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/health-plans/{id}",
    tag = "plan",
    summary = "Delete a plan card",
    params(("id" = Uuid, Path, description = "Plan id")),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 404, description = "Plan not found")
    )
)]
pub async fn delete_health_plan(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    removed_or_not_found(state.service.health_store().remove_health_plan(id), id)
}

#[utoipa::path(
    delete,
    path = "/nutrition-plans/{id}",
    tag = "plan",
    summary = "Delete a nutrition plan",
    params(("id" = Uuid, Path, description = "Plan id")),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 404, description = "Plan not found")
    )
)]
pub async fn delete_nutrition_plan(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    removed_or_not_found(state.service.health_store().remove_nutrition_plan(id), id)
}

#[utoipa::path(
    delete,
    path = "/fitness-plans/{id}",
    tag = "plan",
    summary = "Delete a fitness plan",
    params(("id" = Uuid, Path, description = "Plan id")),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 404, description = "Plan not found")
    )
)]
pub async fn delete_fitness_plan(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    removed_or_not_found(state.service.health_store().remove_fitness_plan(id), id)
}
