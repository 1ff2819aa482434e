use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    analysis::entities::{FoodAnalysis, SymptomAnalysis},
    meal::entities::{Meal, MealTolerance},
    plan::entities::{FitnessPlan, HealthPlan, NutritionPlan},
    profile::entities::UserProfile,
    symptom::entities::Symptom,
};

/// Everything the health store owns. Persisted as one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthState {
    #[serde(default)]
    pub user_profile: UserProfile,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub health_plans: Vec<HealthPlan>,
    #[serde(default)]
    pub nutrition_plans: Vec<NutritionPlan>,
    #[serde(default)]
    pub fitness_plans: Vec<FitnessPlan>,
    #[serde(default)]
    pub meal_tolerances: Vec<MealTolerance>,
    #[serde(default)]
    pub symptom_analyses: Vec<SymptomAnalysis>,
    #[serde(default)]
    pub food_analyses: Vec<FoodAnalysis>,
}

impl HealthState {
    pub fn is_empty(&self) -> bool {
        *self == HealthState::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    UserProfile,
    Symptoms,
    Meals,
    HealthPlans,
    NutritionPlans,
    FitnessPlans,
    MealTolerances,
    SymptomAnalyses,
    FoodAnalyses,
    /// Every collection at once (`clear`).
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ChangeKind {
    Added,
    Removed,
    Updated,
    Cleared,
}

/// Notification sent to observers after a mutation has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreChange {
    pub revision: u64,
    pub collection: Collection,
    pub kind: ChangeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);
