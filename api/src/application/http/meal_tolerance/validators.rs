use chrono::{DateTime, Utc};
use gutcare_core::domain::meal::entities::NewMealTolerance;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::http::server::api_entities::datetime::deserialize_optional_datetime;

fn default_severity() -> i64 {
    1
}

/// A food that was not tolerated needs at least one symptom.
fn validate_reaction(payload: &CreateMealToleranceValidator) -> Result<(), ValidationError> {
    if !payload.tolerated && payload.symptoms.iter().all(|s| s.trim().is_empty()) {
        return Err(ValidationError::new("symptoms_required")
            .with_message("symptoms are required when the food was not tolerated".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_reaction"))]
pub struct CreateMealToleranceValidator {
    #[validate(length(min = 1, message = "foodName is required"))]
    pub food_name: String,

    pub tolerated: bool,

    #[serde(default)]
    pub symptoms: Vec<String>,

    #[serde(default = "default_severity")]
    pub severity: i64,

    #[serde(default)]
    pub notes: String,

    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub date: Option<DateTime<Utc>>,
}

impl From<CreateMealToleranceValidator> for NewMealTolerance {
    fn from(payload: CreateMealToleranceValidator) -> Self {
        Self {
            food_name: payload.food_name,
            tolerated: payload.tolerated,
            symptoms: payload
                .symptoms
                .into_iter()
                .filter(|s| !s.trim().is_empty())
                .collect(),
            severity: payload.severity,
            notes: payload.notes,
            date: payload.date.unwrap_or_else(Utc::now),
        }
    }
}
