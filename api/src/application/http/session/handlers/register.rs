use axum::extract::State;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::{handlers::get_session::SessionResponse, validators::RegisterValidator},
};

#[utoipa::path(
    post,
    path = "/register",
    tag = "session",
    summary = "Create an account",
    description = "Signs the user in with onboarding still pending.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = SessionResponse),
        (status = 400, description = "Invalid email or password")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .session_store()
        .register(&payload.name, &payload.email, &payload.password)
        .map_err(ApiError::from)?;

    Ok(Response::Created(SessionResponse { data: session }))
}
