use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFoodAnalysisValidator {
    #[validate(length(min = 1, max = 200, message = "foodName must be between 1 and 200 characters"))]
    #[schema(example = "Apple")]
    pub food_name: String,

    #[validate(length(min = 1, message = "amount is required"))]
    #[schema(example = "200 g")]
    pub amount: String,
}
