use chrono::{DateTime, Utc};
use gutcare_core::domain::plan::entities::{
    FitnessPlanDraft, NewHealthPlan, NutritionPlanDraft, PlanType, PlannedExercise, PlannedMeal,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::datetime::deserialize_optional_datetime;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateHealthPlanValidator {
    #[serde(rename = "type")]
    pub plan_type: PlanType,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[schema(example = "4 weeks")]
    pub duration: String,

    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub created: Option<DateTime<Utc>>,
}

impl From<CreateHealthPlanValidator> for NewHealthPlan {
    fn from(payload: CreateHealthPlanValidator) -> Self {
        Self {
            plan_type: payload.plan_type,
            title: payload.title,
            description: payload.description,
            duration: payload.duration,
            created: payload.created.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNutritionPlanValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub meals: Vec<PlannedMeal>,

    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl From<CreateNutritionPlanValidator> for NutritionPlanDraft {
    fn from(payload: CreateNutritionPlanValidator) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            duration: payload.duration,
            meals: payload.meals,
            recommendations: payload.recommendations,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFitnessPlanValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub exercises: Vec<PlannedExercise>,

    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl From<CreateFitnessPlanValidator> for FitnessPlanDraft {
    fn from(payload: CreateFitnessPlanValidator) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            duration: payload.duration,
            exercises: payload.exercises,
            recommendations: payload.recommendations,
        }
    }
}
