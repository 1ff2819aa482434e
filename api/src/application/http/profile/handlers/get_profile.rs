use axum::extract::State;
use gutcare_core::domain::profile::entities::UserProfile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "Get the user profile",
    responses(
        (status = 200, body = GetProfileResponse)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    Ok(Response::OK(GetProfileResponse {
        data: state.service.health_store().profile(),
    }))
}
