use axum::extract::State;
use gutcare_core::domain::assistant::ports::AssistantService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ai::validators::ChatValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatResponse {
    pub data: ChatReply,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "ai",
    summary = "Ask the health assistant",
    request_body = ChatValidator,
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, description = "Empty message")
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatValidator>,
) -> Result<Response<ChatResponse>, ApiError> {
    let reply = state
        .service
        .chat(payload.message)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatResponse {
        data: ChatReply { reply },
    }))
}
