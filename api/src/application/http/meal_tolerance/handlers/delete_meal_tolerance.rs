use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "meal-tolerance",
    summary = "Delete a tolerance record",
    params(
        ("id" = Uuid, Path, description = "Tolerance record id"),
    ),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "Record not found")
    )
)]
pub async fn delete_meal_tolerance(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    match state.service.health_store().remove_meal_tolerance(id) {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ApiError::NotFound(format!("tolerance record {id} not found"))),
        Err(e) => Err(ApiError::from(e)),
    }
}
