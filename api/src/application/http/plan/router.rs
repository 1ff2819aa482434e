use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_fitness_plan::{__path_create_fitness_plan, create_fitness_plan},
    create_health_plan::{__path_create_health_plan, create_health_plan},
    create_nutrition_plan::{__path_create_nutrition_plan, create_nutrition_plan},
    delete_plan::{
        __path_delete_fitness_plan, __path_delete_health_plan, __path_delete_nutrition_plan,
        delete_fitness_plan, delete_health_plan, delete_nutrition_plan,
    },
    generate_fitness_plan::{__path_generate_fitness_plan, generate_fitness_plan},
    generate_nutrition_plan::{__path_generate_nutrition_plan, generate_nutrition_plan},
    get_plans::{
        __path_get_fitness_plans, __path_get_health_plans, __path_get_nutrition_plans,
        get_fitness_plans, get_health_plans, get_nutrition_plans,
    },
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_health_plans,
    create_health_plan,
    delete_health_plan,
    get_nutrition_plans,
    create_nutrition_plan,
    generate_nutrition_plan,
    delete_nutrition_plan,
    get_fitness_plans,
    create_fitness_plan,
    generate_fitness_plan,
    delete_fitness_plan
))]
pub struct PlanApiDoc;

pub fn plan_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/health-plans"),
            get(get_health_plans).post(create_health_plan),
        )
        .route(
            &format!("{root_path}/health-plans/{{id}}"),
            delete(delete_health_plan),
        )
        .route(
            &format!("{root_path}/nutrition-plans"),
            get(get_nutrition_plans).post(create_nutrition_plan),
        )
        .route(
            &format!("{root_path}/nutrition-plans/generate"),
            post(generate_nutrition_plan),
        )
        .route(
            &format!("{root_path}/nutrition-plans/{{id}}"),
            delete(delete_nutrition_plan),
        )
        .route(
            &format!("{root_path}/fitness-plans"),
            get(get_fitness_plans).post(create_fitness_plan),
        )
        .route(
            &format!("{root_path}/fitness-plans/generate"),
            post(generate_fitness_plan),
        )
        .route(
            &format!("{root_path}/fitness-plans/{{id}}"),
            delete(delete_fitness_plan),
        )
}
