use gutcare_core::domain::profile::value_objects::UserProfileUpdate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(email(message = "a valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    /// Defaults to the part of the email before `@`.
    #[serde(default)]
    pub name: String,

    #[validate(email(message = "a valid email is required"))]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

/// The onboarding form: disease and age are mandatory, the rest optional.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingValidator {
    #[validate(length(min = 1, message = "disease is required"))]
    pub disease: String,

    #[validate(range(max = 130, message = "age must be at most 130"))]
    pub age: u32,

    #[validate(range(min = 30.0, max = 300.0, message = "height must be between 30 and 300 cm"))]
    #[serde(default)]
    pub height: Option<f64>,

    #[validate(range(min = 1.0, max = 500.0, message = "weight must be between 1 and 500 kg"))]
    #[serde(default)]
    pub weight: Option<f64>,

    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    pub activity_level: Option<String>,
}

impl From<OnboardingValidator> for UserProfileUpdate {
    fn from(payload: OnboardingValidator) -> Self {
        Self {
            height: payload.height,
            weight: payload.weight,
            age: Some(payload.age),
            disease: Some(payload.disease),
            dietary_restrictions: Some(payload.dietary_restrictions),
            activity_level: payload.activity_level,
        }
    }
}
