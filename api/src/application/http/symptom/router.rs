use axum::{
    Router,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    create_symptom::{__path_create_symptom, create_symptom},
    delete_symptom::{__path_delete_symptom, delete_symptom},
    get_symptoms::{__path_get_symptoms, get_symptoms},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_symptoms, create_symptom, delete_symptom))]
pub struct SymptomApiDoc;

pub fn symptom_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/symptoms"),
            get(get_symptoms).post(create_symptom),
        )
        .route(&format!("{root_path}/symptoms/{{id}}"), delete(delete_symptom))
}
