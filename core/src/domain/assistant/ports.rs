use std::future::Future;

use crate::domain::{
    analysis::entities::{FoodAnalysis, SymptomAnalysis},
    common::entities::app_errors::CoreError,
    plan::entities::{FitnessPlan, NutritionPlan},
};

/// AI features as the app exposes them: read what the store knows, ask the
/// gateway, and keep the generated entity.
pub trait AssistantService: Send + Sync {
    fn request_nutrition_plan(
        &self,
    ) -> impl Future<Output = Result<NutritionPlan, CoreError>> + Send;

    fn request_fitness_plan(&self) -> impl Future<Output = Result<FitnessPlan, CoreError>> + Send;

    /// Analyses every symptom code logged so far.
    fn request_symptom_analysis(
        &self,
    ) -> impl Future<Output = Result<SymptomAnalysis, CoreError>> + Send;

    fn request_food_analysis(
        &self,
        food_name: String,
        amount: String,
    ) -> impl Future<Output = Result<FoodAnalysis, CoreError>> + Send;

    fn request_health_insights(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn request_tolerance_advice(
        &self,
        food_name: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn chat(&self, message: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}
