use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "meal",
    summary = "Delete a meal",
    params(
        ("id" = Uuid, Path, description = "Meal id"),
    ),
    responses(
        (status = 204, description = "Meal deleted"),
        (status = 404, description = "Meal not found")
    )
)]
pub async fn delete_meal(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    match state.service.health_store().remove_meal(id) {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ApiError::NotFound(format!("meal {id} not found"))),
        Err(e) => Err(ApiError::from(e)),
    }
}
