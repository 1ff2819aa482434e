use axum::extract::State;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::{handlers::get_session::SessionResponse, validators::OnboardingValidator},
};

#[utoipa::path(
    post,
    path = "/onboarding",
    tag = "session",
    summary = "Finish onboarding",
    description = "Erases previously stored health data, saves the submitted profile and clears the onboarding flag.",
    request_body = OnboardingValidator,
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, description = "Invalid profile")
    )
)]
pub async fn complete_onboarding(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<OnboardingValidator>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .restart_onboarding(payload.into())
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse { data: session }))
}
