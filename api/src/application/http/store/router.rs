use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    clear_store::{__path_clear_store, clear_store},
    get_store::{__path_get_store, get_store},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_store, clear_store))]
pub struct StoreApiDoc;

pub fn store_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/store", state.args.server.root_path),
        get(get_store).delete(clear_store),
    )
}
