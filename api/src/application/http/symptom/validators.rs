use chrono::{DateTime, Utc};
use gutcare_core::domain::symptom::{entities::NewSymptom, value_objects::SymptomType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::datetime::deserialize_optional_datetime;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSymptomValidator {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    #[schema(example = "bloating")]
    pub symptom_type: String,

    /// Out-of-range values are clamped to 1..=5.
    #[schema(example = 3)]
    pub severity: i64,

    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub notes: String,
}

impl From<CreateSymptomValidator> for NewSymptom {
    fn from(payload: CreateSymptomValidator) -> Self {
        Self {
            symptom_type: SymptomType::from(payload.symptom_type),
            severity: payload.severity,
            date: payload.date.unwrap_or_else(Utc::now),
            notes: payload.notes,
        }
    }
}
