use gutcare_core::domain::profile::value_objects::UserProfileUpdate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileValidator {
    #[validate(range(min = 30.0, max = 300.0, message = "height must be between 30 and 300 cm"))]
    #[serde(default)]
    pub height: Option<f64>,

    #[validate(range(min = 1.0, max = 500.0, message = "weight must be between 1 and 500 kg"))]
    #[serde(default)]
    pub weight: Option<f64>,

    #[validate(range(max = 130, message = "age must be at most 130"))]
    #[serde(default)]
    pub age: Option<u32>,

    #[validate(length(min = 1, message = "disease cannot be empty"))]
    #[serde(default)]
    pub disease: Option<String>,

    #[serde(default)]
    pub dietary_restrictions: Option<Vec<String>>,

    #[validate(length(min = 1, message = "activity level cannot be empty"))]
    #[serde(default)]
    pub activity_level: Option<String>,
}

impl From<UpdateProfileValidator> for UserProfileUpdate {
    fn from(payload: UpdateProfileValidator) -> Self {
        Self {
            height: payload.height,
            weight: payload.weight,
            age: payload.age,
            disease: payload.disease,
            dietary_restrictions: payload.dietary_restrictions,
            activity_level: payload.activity_level,
        }
    }
}
