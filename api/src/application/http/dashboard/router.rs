use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_dashboard::{__path_get_dashboard, get_dashboard};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_dashboard))]
pub struct DashboardApiDoc;

pub fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/dashboard", state.args.server.root_path),
        get(get_dashboard),
    )
}
