use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::value_objects::Severity, symptom::value_objects::SymptomType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Symptom {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "bloating")]
    pub symptom_type: SymptomType,
    #[schema(value_type = u8, minimum = 1, maximum = 5)]
    pub severity: Severity,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

/// A symptom as entered in the tracker form, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewSymptom {
    pub symptom_type: SymptomType,
    pub severity: i64,
    pub date: DateTime<Utc>,
    pub notes: String,
}

impl Symptom {
    pub fn new(id: Uuid, input: NewSymptom) -> Self {
        Self {
            id,
            symptom_type: input.symptom_type,
            severity: Severity::clamped(input.severity),
            date: input.date,
            notes: input.notes,
        }
    }
}
