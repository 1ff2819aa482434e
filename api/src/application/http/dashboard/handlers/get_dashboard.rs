use axum::extract::State;
use chrono::Utc;
use gutcare_core::domain::dashboard::entities::DashboardSummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDashboardResponse {
    pub data: DashboardSummary,
}

#[utoipa::path(
    get,
    path = "",
    tag = "dashboard",
    summary = "Dashboard figures",
    description = "\"Today\" is the current UTC date.",
    responses(
        (status = 200, body = GetDashboardResponse)
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Response<GetDashboardResponse>, ApiError> {
    Ok(Response::OK(GetDashboardResponse {
        data: state.service.dashboard(Utc::now().date_naive()),
    }))
}
