use axum::extract::State;
use gutcare_core::domain::profile::entities::UserProfile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    profile::validators::UpdateProfileValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    patch,
    path = "",
    tag = "profile",
    summary = "Update the user profile",
    description = "Shallow merge: fields present in the body replace stored values, absent fields are kept.",
    request_body = UpdateProfileValidator,
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 400, description = "Invalid profile values")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let store = state.service.health_store();
    store.update_profile(payload.into()).map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse {
        data: store.profile(),
    }))
}
