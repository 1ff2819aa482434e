use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    delete,
    path = "",
    tag = "store",
    summary = "Erase all health data",
    description = "Resets the profile and empties every collection. The session is left alone.",
    responses(
        (status = 204, description = "Store cleared")
    )
)]
pub async fn clear_store(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state
        .service
        .health_store()
        .clear()
        .map_err(ApiError::from)?;
    info!("health store cleared over http");

    Ok(StatusCode::NO_CONTENT)
}
