use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{application::http::server::app_state::AppState, args::StorageKind};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetConfigResponse {
    pub app_version: String,
    pub storage_backend: String,
    pub gemini_model: String,
    pub ai_enabled: bool,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get server configuration",
    responses(
        (status = 200, body = GetConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<GetConfigResponse> {
    let storage_backend = match state.args.storage.backend {
        StorageKind::File => "file",
        StorageKind::Memory => "memory",
    };

    Json(GetConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        storage_backend: storage_backend.to_string(),
        gemini_model: state.args.llm.gemini_model.clone(),
        ai_enabled: !state.args.llm.gemini_api_key.trim().is_empty(),
    })
}
