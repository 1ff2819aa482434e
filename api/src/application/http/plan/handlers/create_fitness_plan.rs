use axum::extract::State;
use gutcare_core::domain::{common::entities::app_errors::CoreError, plan::entities::FitnessPlan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plan::validators::CreateFitnessPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateFitnessPlanResponse {
    pub data: FitnessPlan,
}

#[utoipa::path(
    post,
    path = "/fitness-plans",
    tag = "plan",
    summary = "Store a fitness plan",
    request_body = CreateFitnessPlanValidator,
    responses(
        (status = 201, body = CreateFitnessPlanResponse),
        (status = 400, description = "Invalid plan")
    )
)]
pub async fn create_fitness_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateFitnessPlanValidator>,
) -> Result<Response<CreateFitnessPlanResponse>, ApiError> {
    let store = state.service.health_store();
    let id = store
        .add_fitness_plan(payload.into())
        .map_err(ApiError::from)?;

    let plan = store
        .fitness_plan(id)
        .ok_or(ApiError::from(CoreError::InternalServerError))?;

    Ok(Response::Created(CreateFitnessPlanResponse { data: plan }))
}
