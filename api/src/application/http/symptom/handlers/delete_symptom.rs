use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "symptom",
    summary = "Delete a symptom",
    params(
        ("id" = Uuid, Path, description = "Symptom id"),
    ),
    responses(
        (status = 204, description = "Symptom deleted"),
        (status = 404, description = "Symptom not found")
    )
)]
pub async fn delete_symptom(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .service
        .health_store()
        .remove_symptom(id)
        .map_err(ApiError::from)?;

    if !removed {
        return Err(ApiError::NotFound(format!("symptom {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
