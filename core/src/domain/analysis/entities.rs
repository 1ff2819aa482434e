use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{generate_uuid_v7, value_objects::Severity},
    symptom::value_objects::SymptomType,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub id: Uuid,
    /// Snapshot of the analysed symptom codes.
    #[schema(value_type = Vec<String>)]
    pub symptoms: Vec<SymptomType>,
    #[schema(value_type = u8, minimum = 1, maximum = 5)]
    pub severity: Severity,
    pub possible_causes: Vec<String>,
    pub recommendations: Vec<String>,
    pub related_foods: Vec<String>,
    pub warning_signs: Vec<String>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomAnalysisDraft {
    pub symptoms: Vec<SymptomType>,
    pub severity: Severity,
    pub possible_causes: Vec<String>,
    pub recommendations: Vec<String>,
    pub related_foods: Vec<String>,
    pub warning_signs: Vec<String>,
}

impl SymptomAnalysis {
    pub fn new(id: Uuid, draft: SymptomAnalysisDraft, date: DateTime<Utc>) -> Self {
        Self {
            id,
            symptoms: draft.symptoms,
            severity: draft.severity,
            possible_causes: draft.possible_causes,
            recommendations: draft.recommendations,
            related_foods: draft.related_foods,
            warning_signs: draft.warning_signs,
            date,
        }
    }

    pub fn generated(draft: SymptomAnalysisDraft) -> Self {
        Self::new(generate_uuid_v7(), draft, Utc::now())
    }
}

impl From<SymptomAnalysis> for SymptomAnalysisDraft {
    fn from(analysis: SymptomAnalysis) -> Self {
        Self {
            symptoms: analysis.symptoms,
            severity: analysis.severity,
            possible_causes: analysis.possible_causes,
            recommendations: analysis.recommendations,
            related_foods: analysis.related_foods,
            warning_signs: analysis.warning_signs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Good,
    Moderate,
    Avoid,
}

/// Macro-nutrients in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrients {
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    pub id: Uuid,
    pub food_name: String,
    pub amount: String,
    pub calories: f64,
    pub nutrients: Nutrients,
    pub suitability: Suitability,
    pub recommendations: Vec<String>,
    pub alternatives: Vec<String>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodAnalysisDraft {
    pub food_name: String,
    pub amount: String,
    pub calories: f64,
    pub nutrients: Nutrients,
    pub suitability: Suitability,
    pub recommendations: Vec<String>,
    pub alternatives: Vec<String>,
}

impl FoodAnalysis {
    pub fn new(id: Uuid, draft: FoodAnalysisDraft, date: DateTime<Utc>) -> Self {
        Self {
            id,
            food_name: draft.food_name,
            amount: draft.amount,
            calories: draft.calories,
            nutrients: draft.nutrients,
            suitability: draft.suitability,
            recommendations: draft.recommendations,
            alternatives: draft.alternatives,
            date,
        }
    }

    pub fn generated(draft: FoodAnalysisDraft) -> Self {
        Self::new(generate_uuid_v7(), draft, Utc::now())
    }
}

impl From<FoodAnalysis> for FoodAnalysisDraft {
    fn from(analysis: FoodAnalysis) -> Self {
        Self {
            food_name: analysis.food_name,
            amount: analysis.amount,
            calories: analysis.calories,
            nutrients: analysis.nutrients,
            suitability: analysis.suitability,
            recommendations: analysis.recommendations,
            alternatives: analysis.alternatives,
        }
    }
}
