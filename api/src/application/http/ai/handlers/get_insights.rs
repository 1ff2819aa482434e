use axum::extract::State;
use gutcare_core::domain::assistant::ports::AssistantService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct InsightsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/insights",
    tag = "ai",
    summary = "Health insights from recent meals and symptoms",
    responses(
        (status = 200, body = InsightsResponse)
    )
)]
pub async fn get_insights(
    State(state): State<AppState>,
) -> Result<Response<InsightsResponse>, ApiError> {
    let insights = state
        .service
        .request_health_insights()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(InsightsResponse { data: insights }))
}
