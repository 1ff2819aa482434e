use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    meal::entities::Meal, profile::entities::UserProfile, symptom::entities::Symptom,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCounts {
    pub symptoms: usize,
    pub meals: usize,
    pub health_plans: usize,
    pub nutrition_plans: usize,
    pub fitness_plans: usize,
    pub meal_tolerances: usize,
    pub symptom_analyses: usize,
    pub food_analyses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub profile: UserProfile,
    pub counts: CollectionCounts,
    /// Rounded mean over all meals, 0 without meals.
    pub average_calories: f64,
    pub today_calories: f64,
    pub recent_symptoms: Vec<Symptom>,
    pub recent_meals: Vec<Meal>,
    pub diet_plans: usize,
    pub fitness_plans: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_frequent_symptom: Option<String>,
}
