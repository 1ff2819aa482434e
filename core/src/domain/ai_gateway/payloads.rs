use serde::{Deserialize, de::DeserializeOwned};

use crate::domain::{
    analysis::entities::{FoodAnalysisDraft, Nutrients, Suitability, SymptomAnalysisDraft},
    common::value_objects::Severity,
    plan::entities::{FitnessPlanDraft, NutritionPlanDraft, PlannedExercise, PlannedMeal},
    symptom::value_objects::SymptomType,
};

/// Shape of a structured completion.
pub trait AiPayload: DeserializeOwned {
    /// Top-level fields that must be lists. Absent or `null` ones are read as `[]`.
    const LIST_FIELDS: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlanPayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    pub meals: Vec<PlannedMeal>,
    pub recommendations: Vec<String>,
}

impl AiPayload for NutritionPlanPayload {
    const LIST_FIELDS: &'static [&'static str] = &["meals", "recommendations"];
}

impl From<NutritionPlanPayload> for NutritionPlanDraft {
    fn from(payload: NutritionPlanPayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            duration: payload.duration,
            meals: payload.meals,
            recommendations: payload.recommendations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPlanPayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    pub exercises: Vec<PlannedExercise>,
    pub recommendations: Vec<String>,
}

impl AiPayload for FitnessPlanPayload {
    const LIST_FIELDS: &'static [&'static str] = &["exercises", "recommendations"];
}

impl From<FitnessPlanPayload> for FitnessPlanDraft {
    fn from(payload: FitnessPlanPayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            duration: payload.duration,
            exercises: payload.exercises,
            recommendations: payload.recommendations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysisPayload {
    pub severity: Severity,
    pub possible_causes: Vec<String>,
    pub recommendations: Vec<String>,
    pub related_foods: Vec<String>,
    pub warning_signs: Vec<String>,
}

impl AiPayload for SymptomAnalysisPayload {
    const LIST_FIELDS: &'static [&'static str] = &[
        "possibleCauses",
        "recommendations",
        "relatedFoods",
        "warningSigns",
    ];
}

impl SymptomAnalysisPayload {
    pub fn into_draft(self, symptoms: Vec<SymptomType>) -> SymptomAnalysisDraft {
        SymptomAnalysisDraft {
            symptoms,
            severity: self.severity,
            possible_causes: self.possible_causes,
            recommendations: self.recommendations,
            related_foods: self.related_foods,
            warning_signs: self.warning_signs,
        }
    }
}

fn default_suitability() -> Suitability {
    Suitability::Moderate
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysisPayload {
    pub calories: f64,
    #[serde(default)]
    pub nutrients: Nutrients,
    #[serde(default = "default_suitability")]
    pub suitability: Suitability,
    pub recommendations: Vec<String>,
    pub alternatives: Vec<String>,
}

impl AiPayload for FoodAnalysisPayload {
    const LIST_FIELDS: &'static [&'static str] = &["recommendations", "alternatives"];
}

impl FoodAnalysisPayload {
    pub fn into_draft(self, food_name: &str, amount: &str) -> FoodAnalysisDraft {
        FoodAnalysisDraft {
            food_name: food_name.to_string(),
            amount: amount.to_string(),
            calories: self.calories.max(0.0),
            nutrients: self.nutrients,
            suitability: self.suitability,
            recommendations: self.recommendations,
            alternatives: self.alternatives,
        }
    }
}
