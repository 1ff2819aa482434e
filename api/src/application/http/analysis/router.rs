use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    delete_analysis::{
        __path_delete_food_analysis, __path_delete_symptom_analysis, delete_food_analysis,
        delete_symptom_analysis,
    },
    generate_food_analysis::{__path_generate_food_analysis, generate_food_analysis},
    generate_symptom_analysis::{__path_generate_symptom_analysis, generate_symptom_analysis},
    get_analyses::{
        __path_get_food_analyses, __path_get_symptom_analyses, get_food_analyses,
        get_symptom_analyses,
    },
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_symptom_analyses,
    generate_symptom_analysis,
    delete_symptom_analysis,
    get_food_analyses,
    generate_food_analysis,
    delete_food_analysis
))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/symptom-analyses"),
            get(get_symptom_analyses),
        )
        .route(
            &format!("{root_path}/symptom-analyses/generate"),
            post(generate_symptom_analysis),
        )
        .route(
            &format!("{root_path}/symptom-analyses/{{id}}"),
            delete(delete_symptom_analysis),
        )
        .route(&format!("{root_path}/food-analyses"), get(get_food_analyses))
        .route(
            &format!("{root_path}/food-analyses/generate"),
            post(generate_food_analysis),
        )
        .route(
            &format!("{root_path}/food-analyses/{{id}}"),
            delete(delete_food_analysis),
        )
}
