use axum::extract::State;
use gutcare_core::domain::{common::entities::app_errors::CoreError, meal::entities::Meal};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    meal::validators::CreateMealValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateMealResponse {
    pub data: Meal,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal",
    summary = "Log a meal",
    description = "Negative or non-numeric calories are stored as 0.",
    request_body = CreateMealValidator,
    responses(
        (status = 201, body = CreateMealResponse),
        (status = 400, description = "Invalid meal")
    )
)]
pub async fn create_meal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateMealValidator>,
) -> Result<Response<CreateMealResponse>, ApiError> {
    let store = state.service.health_store();
    let id = store.add_meal(payload.into()).map_err(ApiError::from)?;

    let meal = store
        .meal(id)
        .ok_or(ApiError::from(CoreError::InternalServerError))?;

    Ok(Response::Created(CreateMealResponse { data: meal }))
}
