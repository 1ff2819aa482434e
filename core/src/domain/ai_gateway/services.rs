use tracing::{info, instrument, warn};

use crate::domain::{
    ai_gateway::{
        fallbacks,
        payloads::{
            AiPayload, FitnessPlanPayload, FoodAnalysisPayload, NutritionPlanPayload,
            SymptomAnalysisPayload,
        },
        ports::LLMClient,
        prompts,
        reconcile::{decode, non_empty_lines},
        value_objects::{HealthProfile, Reconciled},
    },
    analysis::entities::{FoodAnalysis, SymptomAnalysis},
    meal::entities::{Meal, MealTolerance},
    plan::entities::{FitnessPlan, NutritionPlan},
    symptom::{entities::Symptom, value_objects::SymptomType},
};

/// Builds prompts, calls the completion service and reconciles its replies.
///
/// No operation fails: when the service errors or the reply cannot be read,
/// the operation's fallback value is returned instead.
#[derive(Debug, Clone)]
pub struct AiGateway<LLM: LLMClient> {
    llm_client: LLM,
}

impl<LLM: LLMClient> AiGateway<LLM> {
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }

    async fn structured<P: AiPayload>(&self, operation: &'static str, prompt: String) -> Option<P> {
        let raw = match self.llm_client.generate_text(prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(operation, "completion request failed, using fallback: {}", e);
                return None;
            }
        };

        match decode::<P>(&raw) {
            Ok(payload) => {
                info!(operation, "completion parsed");
                Some(payload)
            }
            Err(e) => {
                warn!(operation, "unreadable completion, using fallback: {}", e);
                None
            }
        }
    }

    async fn lines(&self, operation: &'static str, prompt: String) -> Option<Vec<String>> {
        match self.llm_client.generate_text(prompt).await {
            Ok(raw) => {
                let lines = non_empty_lines(&raw);
                if lines.is_empty() {
                    warn!(operation, "empty completion");
                    None
                } else {
                    Some(lines)
                }
            }
            Err(e) => {
                warn!(operation, "completion request failed: {}", e);
                None
            }
        }
    }

    #[instrument(skip_all, fields(disease = %profile.disease))]
    pub async fn nutrition_plan(&self, profile: &HealthProfile) -> Reconciled<NutritionPlan> {
        let prompt = prompts::nutrition_plan_prompt(profile);
        match self
            .structured::<NutritionPlanPayload>("nutrition_plan", prompt)
            .await
        {
            Some(payload) => Reconciled::parsed(NutritionPlan::generated(payload.into())),
            None => Reconciled::fallback(NutritionPlan::generated(fallbacks::nutrition_plan(
                profile,
            ))),
        }
    }

    pub async fn generate_nutrition_plan(&self, profile: &HealthProfile) -> NutritionPlan {
        self.nutrition_plan(profile).await.into_inner()
    }

    #[instrument(skip_all, fields(disease = %profile.disease))]
    pub async fn fitness_plan(&self, profile: &HealthProfile) -> Reconciled<FitnessPlan> {
        let prompt = prompts::fitness_plan_prompt(profile);
        match self
            .structured::<FitnessPlanPayload>("fitness_plan", prompt)
            .await
        {
            Some(payload) => Reconciled::parsed(FitnessPlan::generated(payload.into())),
            None => Reconciled::fallback(FitnessPlan::generated(fallbacks::fitness_plan(profile))),
        }
    }

    pub async fn generate_fitness_plan(&self, profile: &HealthProfile) -> FitnessPlan {
        self.fitness_plan(profile).await.into_inner()
    }

    #[instrument(skip_all, fields(symptoms = symptoms.len()))]
    pub async fn symptom_analysis(
        &self,
        symptoms: &[SymptomType],
        profile: &HealthProfile,
    ) -> Reconciled<SymptomAnalysis> {
        let prompt = prompts::symptom_analysis_prompt(symptoms, profile);
        match self
            .structured::<SymptomAnalysisPayload>("symptom_analysis", prompt)
            .await
        {
            Some(payload) => {
                Reconciled::parsed(SymptomAnalysis::generated(payload.into_draft(symptoms.to_vec())))
            }
            None => Reconciled::fallback(SymptomAnalysis::generated(fallbacks::symptom_analysis(
                symptoms,
            ))),
        }
    }

    pub async fn analyze_symptoms(
        &self,
        symptoms: &[SymptomType],
        profile: &HealthProfile,
    ) -> SymptomAnalysis {
        self.symptom_analysis(symptoms, profile).await.into_inner()
    }

    #[instrument(skip(self))]
    pub async fn food_calories(&self, food_name: &str, amount: &str) -> Reconciled<FoodAnalysis> {
        let prompt = prompts::food_analysis_prompt(food_name, amount);
        match self
            .structured::<FoodAnalysisPayload>("food_analysis", prompt)
            .await
        {
            Some(payload) => {
                Reconciled::parsed(FoodAnalysis::generated(payload.into_draft(food_name, amount)))
            }
            None => Reconciled::fallback(FoodAnalysis::generated(fallbacks::food_analysis(
                food_name, amount,
            ))),
        }
    }

    pub async fn calculate_food_calories(&self, food_name: &str, amount: &str) -> FoodAnalysis {
        self.food_calories(food_name, amount).await.into_inner()
    }

    #[instrument(skip_all, fields(meals = recent_meals.len(), symptoms = recent_symptoms.len()))]
    pub async fn get_health_insights(
        &self,
        profile: &HealthProfile,
        recent_meals: &[Meal],
        recent_symptoms: &[Symptom],
    ) -> Vec<String> {
        let prompt = prompts::health_insights_prompt(profile, recent_meals, recent_symptoms);
        self.lines("health_insights", prompt)
            .await
            .unwrap_or_else(|| vec![fallbacks::INSIGHTS_UNAVAILABLE.to_string()])
    }

    #[instrument(skip(self, history, profile), fields(records = history.len()))]
    pub async fn analyze_food_tolerance(
        &self,
        food_name: &str,
        history: &[MealTolerance],
        profile: &HealthProfile,
    ) -> Vec<String> {
        let prompt = prompts::food_tolerance_prompt(food_name, history, profile);
        self.lines("food_tolerance", prompt)
            .await
            .unwrap_or_else(|| vec![fallbacks::TOLERANCE_UNAVAILABLE.to_string()])
    }

    #[instrument(skip_all)]
    pub async fn chat_with_ai(&self, message: &str, context: Option<&str>) -> String {
        let prompt = prompts::chat_prompt(message, context);
        match self.llm_client.generate_text(prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("chat completion failed: {}", e);
                fallbacks::CHAT_UNAVAILABLE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;

    use super::*;
    use crate::domain::{
        ai_gateway::ports::MockLLMClient, common::entities::app_errors::CoreError,
        profile::entities::UserProfile,
    };

    fn replying(reply: &'static str) -> AiGateway<MockLLMClient> {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .returning(move |_| Box::pin(async move { Ok(reply.to_string()) }));
        AiGateway::new(llm)
    }

    fn failing() -> AiGateway<MockLLMClient> {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("offline".to_string())) })
        });
        AiGateway::new(llm)
    }

    fn profile() -> HealthProfile {
        HealthProfile::from(&UserProfile {
            age: Some(45),
            disease: Some("Ulcerative colitis".to_string()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_fenced_reply_becomes_plan() {
        let gateway = replying(
            "Sure! ```json\n{\"title\":\"X\",\"meals\":[],\"recommendations\":[]}\n```",
        );

        let plan = gateway.nutrition_plan(&profile()).await;

        assert!(!plan.is_fallback());
        assert_eq!(plan.value.title, "X");
        assert!(plan.value.meals.is_empty());
        assert!(plan.value.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_reply_without_braces_falls_back() {
        let gateway = replying("I'm not able to produce a plan today.");

        let plan = gateway.nutrition_plan(&profile()).await;

        assert!(plan.is_fallback());
        assert_eq!(plan.value.title, "7-Day Gentle Nutrition Plan");
        assert!(!plan.value.meals.is_empty());
        assert!(!plan.value.recommendations.is_empty());
        assert!(!plan.value.duration.is_empty());
    }

    #[tokio::test]
    async fn test_fitness_plan_parses_exercises() {
        let gateway = replying(
            r#"{"title":"Core week","exercises":[{"name":"Plank","sets":3,"reps":1,"duration":"30 seconds","notes":""}]}"#,
        );

        let plan = gateway.fitness_plan(&profile()).await;

        assert!(!plan.is_fallback());
        assert_eq!(plan.value.exercises[0].name, "Plank");
        assert!(plan.value.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_fitness_plan_tolerates_loose_counts() {
        let gateway = replying(
            r#"{"title":"Legs","exercises":[{"name":"Squat","sets":3.0,"reps":"10-12"}]}"#,
        );

        let plan = gateway.fitness_plan(&profile()).await;

        assert!(!plan.is_fallback());
        assert_eq!(plan.value.exercises[0].sets, 3);
        assert_eq!(plan.value.exercises[0].reps, 10);
    }

    #[tokio::test]
    async fn test_failed_symptom_analysis_is_fully_shaped() {
        let gateway = failing();
        let symptoms = vec![SymptomType::Bloating, SymptomType::Gas];

        let analysis = gateway.symptom_analysis(&symptoms, &profile()).await;

        assert!(analysis.is_fallback());
        assert_eq!(analysis.value.symptoms, symptoms);
        assert!((1..=5).contains(&analysis.value.severity.value()));
        assert!(!analysis.value.possible_causes.is_empty());
        assert!(!analysis.value.recommendations.is_empty());
        assert!(!analysis.value.related_foods.is_empty());
        assert!(!analysis.value.warning_signs.is_empty());
    }

    #[tokio::test]
    async fn test_symptom_analysis_clamps_severity() {
        let gateway = replying(r#"{"severity": 9, "possibleCauses": ["Lactose"]}"#);

        let analysis = gateway
            .analyze_symptoms(&[SymptomType::Cramps], &profile())
            .await;

        assert_eq!(analysis.severity.value(), 5);
        assert_eq!(analysis.possible_causes, vec!["Lactose".to_string()]);
        assert_eq!(analysis.symptoms, vec![SymptomType::Cramps]);
    }

    #[tokio::test]
    async fn test_food_calories_keeps_requested_name() {
        let gateway = replying(
            r#"{"calories": 180, "nutrients": {"protein": 4, "carbs": 38, "fat": 1, "fiber": 1}, "suitability": "good", "recommendations": [], "alternatives": ["Quinoa"]}"#,
        );

        let analysis = gateway.calculate_food_calories("Rice", "1 cup").await;

        assert_eq!(analysis.food_name, "Rice");
        assert_eq!(analysis.amount, "1 cup");
        assert_eq!(analysis.calories, 180.0);
        assert_eq!(analysis.alternatives, vec!["Quinoa".to_string()]);
    }

    #[tokio::test]
    async fn test_food_calories_fallback_uses_estimator() {
        let gateway = replying("{\"calories\": \"lots\"}");

        let analysis = gateway.food_calories("Salmon", "150 g").await;

        assert!(analysis.is_fallback());
        assert_eq!(analysis.value.calories, 312.0);
    }

    #[tokio::test]
    async fn test_insights_are_split_into_lines() {
        let gateway = replying("1. Drink water\n\n2. Walk daily\n");

        let insights = gateway.get_health_insights(&profile(), &[], &[]).await;

        assert_eq!(insights, vec!["1. Drink water", "2. Walk daily"]);
    }

    #[tokio::test]
    async fn test_free_text_failures_return_apologies() {
        let gateway = failing();

        let insights = gateway.get_health_insights(&profile(), &[], &[]).await;
        assert_eq!(insights, vec![fallbacks::INSIGHTS_UNAVAILABLE.to_string()]);

        let advice = gateway.analyze_food_tolerance("Milk", &[], &profile()).await;
        assert_eq!(advice, vec![fallbacks::TOLERANCE_UNAVAILABLE.to_string()]);

        let reply = gateway.chat_with_ai("Hello", None).await;
        assert_eq!(reply, fallbacks::CHAT_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_chat_sends_context_prompt() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .with(function(|prompt: &String| {
                prompt == "Context: Disease: IBS\n\nUser: Can I eat rice?\n\nAssistant:"
            }))
            .times(1)
            .returning(|_| Box::pin(async { Ok("Yes, in moderation.".to_string()) }));
        let gateway = AiGateway::new(llm);

        let reply = gateway
            .chat_with_ai("Can I eat rice?", Some("Disease: IBS"))
            .await;

        assert_eq!(reply, "Yes, in moderation.");
    }
}
