use axum::extract::State;
use gutcare_core::domain::{common::entities::app_errors::CoreError, symptom::entities::Symptom};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    symptom::validators::CreateSymptomValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateSymptomResponse {
    pub data: Symptom,
}

#[utoipa::path(
    post,
    path = "",
    tag = "symptom",
    summary = "Log a symptom",
    request_body = CreateSymptomValidator,
    responses(
        (status = 201, body = CreateSymptomResponse),
        (status = 400, description = "Missing symptom type")
    )
)]
pub async fn create_symptom(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateSymptomValidator>,
) -> Result<Response<CreateSymptomResponse>, ApiError> {
    let store = state.service.health_store();
    let id = store.add_symptom(payload.into()).map_err(ApiError::from)?;

    let symptom = store
        .symptom(id)
        .ok_or(ApiError::from(CoreError::InternalServerError))?;

    Ok(Response::Created(CreateSymptomResponse { data: symptom }))
}
