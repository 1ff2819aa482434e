use axum::extract::State;
use gutcare_core::domain::{
    common::entities::app_errors::CoreError, plan::entities::NutritionPlan,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plan::validators::CreateNutritionPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateNutritionPlanResponse {
    pub data: NutritionPlan,
}

#[utoipa::path(
    post,
    path = "/nutrition-plans",
    tag = "plan",
    summary = "Store a nutrition plan",
    request_body = CreateNutritionPlanValidator,
    responses(
        (status = 201, body = CreateNutritionPlanResponse),
        (status = 400, description = "Invalid plan")
    )
)]
pub async fn create_nutrition_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateNutritionPlanValidator>,
) -> Result<Response<CreateNutritionPlanResponse>, ApiError> {
    let store = state.service.health_store();
    let id = store
        .add_nutrition_plan(payload.into())
        .map_err(ApiError::from)?;

    let plan = store
        .nutrition_plan(id)
        .ok_or(ApiError::from(CoreError::InternalServerError))?;

    Ok(Response::Created(CreateNutritionPlanResponse { data: plan }))
}
