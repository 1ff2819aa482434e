use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::stream_events::{__path_stream_events, stream_events};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(stream_events))]
pub struct EventsApiDoc;

pub fn events_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/events", state.args.server.root_path),
        get(stream_events),
    )
}
