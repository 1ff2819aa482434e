use axum::extract::State;
use gutcare_core::domain::health_store::entities::HealthState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetStoreResponse {
    pub revision: u64,
    pub data: HealthState,
}

#[utoipa::path(
    get,
    path = "",
    tag = "store",
    summary = "Snapshot of every health collection",
    responses(
        (status = 200, body = GetStoreResponse)
    )
)]
pub async fn get_store(
    State(state): State<AppState>,
) -> Result<Response<GetStoreResponse>, ApiError> {
    let store = state.service.health_store();

    Ok(Response::OK(GetStoreResponse {
        revision: store.revision(),
        data: store.snapshot(),
    }))
}
