use axum::extract::State;
use gutcare_core::domain::{common::entities::app_errors::CoreError, plan::entities::HealthPlan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plan::validators::CreateHealthPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateHealthPlanResponse {
    pub data: HealthPlan,
}

#[utoipa::path(
    post,
    path = "/health-plans",
    tag = "plan",
    summary = "Create a plan card",
    request_body = CreateHealthPlanValidator,
    responses(
        (status = 201, body = CreateHealthPlanResponse),
        (status = 400, description = "Invalid plan")
    )
)]
pub async fn create_health_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateHealthPlanValidator>,
) -> Result<Response<CreateHealthPlanResponse>, ApiError> {
    let store = state.service.health_store();
    let id = store
        .add_health_plan(payload.into())
        .map_err(ApiError::from)?;

    let plan = store
        .health_plan(id)
        .ok_or(ApiError::from(CoreError::InternalServerError))?;

    Ok(Response::Created(CreateHealthPlanResponse { data: plan }))
}
