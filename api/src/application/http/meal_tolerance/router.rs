use axum::{
    Router,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    create_meal_tolerance::{__path_create_meal_tolerance, create_meal_tolerance},
    delete_meal_tolerance::{__path_delete_meal_tolerance, delete_meal_tolerance},
    get_meal_tolerances::{__path_get_meal_tolerances, get_meal_tolerances},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_meal_tolerances, create_meal_tolerance, delete_meal_tolerance))]
pub struct MealToleranceApiDoc;

pub fn meal_tolerance_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/meal-tolerances"),
            get(get_meal_tolerances).post(create_meal_tolerance),
        )
        .route(
            &format!("{root_path}/meal-tolerances/{{id}}"),
            delete(delete_meal_tolerance),
        )
}
