use axum::extract::State;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::handlers::get_session::SessionResponse,
};

#[utoipa::path(
    post,
    path = "/logout",
    tag = "session",
    summary = "Sign out",
    responses(
        (status = 200, body = SessionResponse)
    )
)]
pub async fn logout(State(state): State<AppState>) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .session_store()
        .logout()
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse { data: session }))
}
