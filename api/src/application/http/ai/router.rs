use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    chat::{__path_chat, chat},
    get_insights::{__path_get_insights, get_insights},
    get_tolerance_advice::{__path_get_tolerance_advice, get_tolerance_advice},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_insights, chat, get_tolerance_advice))]
pub struct AiApiDoc;

pub fn ai_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/ai/insights"), post(get_insights))
        .route(&format!("{root_path}/ai/chat"), post(chat))
        .route(
            &format!("{root_path}/ai/tolerance"),
            post(get_tolerance_advice),
        )
}
