use axum::extract::State;
use gutcare_core::domain::session::entities::SessionState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionResponse {
    pub data: SessionState,
}

#[utoipa::path(
    get,
    path = "",
    tag = "session",
    summary = "Current session",
    responses(
        (status = 200, body = SessionResponse)
    )
)]
pub async fn get_session(
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    Ok(Response::OK(SessionResponse {
        data: state.service.session_store().current(),
    }))
}
