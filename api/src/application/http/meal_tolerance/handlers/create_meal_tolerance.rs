use axum::extract::State;
use gutcare_core::domain::{
    common::entities::app_errors::CoreError, meal::entities::MealTolerance,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::application::http::{
    meal_tolerance::validators::CreateMealToleranceValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateMealToleranceResponse {
    pub data: MealTolerance,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal-tolerance",
    summary = "Record how a food was tolerated",
    request_body = CreateMealToleranceValidator,
    responses(
        (status = 201, body = CreateMealToleranceResponse),
        (status = 400, description = "Missing food name, or no symptoms for a reaction")
    )
)]
pub async fn create_meal_tolerance(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateMealToleranceValidator>,
) -> Result<Response<CreateMealToleranceResponse>, ApiError> {
    let store = state.service.health_store();
    let id = store
        .add_meal_tolerance(payload.into())
        .map_err(ApiError::from)?;

    let tolerance = store
        .meal_tolerance(id)
        .ok_or(ApiError::from(CoreError::InternalServerError))?;
    info!(%id, tolerated = tolerance.tolerated, "tolerance recorded");

    Ok(Response::Created(CreateMealToleranceResponse { data: tolerance }))
}
