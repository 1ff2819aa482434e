use axum::{
    Router,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    create_meal::{__path_create_meal, create_meal},
    delete_meal::{__path_delete_meal, delete_meal},
    get_meals::{__path_get_meals, get_meals},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_meals, create_meal, delete_meal))]
pub struct MealApiDoc;

pub fn meal_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/meals"), get(get_meals).post(create_meal))
        .route(&format!("{root_path}/meals/{{id}}"), delete(delete_meal))
}
