use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatValidator {
    #[validate(length(min = 1, max = 4000, message = "message must be between 1 and 4000 characters"))]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToleranceAdviceValidator {
    #[validate(length(min = 1, message = "foodName is required"))]
    pub food_name: String,
}
