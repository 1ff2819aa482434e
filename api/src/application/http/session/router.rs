use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    complete_onboarding::{__path_complete_onboarding, complete_onboarding},
    get_session::{__path_get_session, get_session},
    login::{__path_login, login},
    logout::{__path_logout, logout},
    register::{__path_register, register},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_session, login, register, logout, complete_onboarding))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/session"), get(get_session))
        .route(&format!("{root_path}/session/login"), post(login))
        .route(&format!("{root_path}/session/register"), post(register))
        .route(&format!("{root_path}/session/logout"), post(logout))
        .route(
            &format!("{root_path}/session/onboarding"),
            post(complete_onboarding),
        )
}
