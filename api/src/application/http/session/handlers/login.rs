use axum::extract::State;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::{handlers::get_session::SessionResponse, validators::LoginValidator},
};

#[utoipa::path(
    post,
    path = "/login",
    tag = "session",
    summary = "Sign in",
    description = "Any credentials are accepted; the user id is derived from the email.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, description = "Invalid email")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .session_store()
        .login(&payload.email, &payload.password)
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse { data: session }))
}
