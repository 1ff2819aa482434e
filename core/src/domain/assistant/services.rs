use tracing::{info, warn};

use crate::domain::{
    ai_gateway::{ports::LLMClient, value_objects::HealthProfile},
    analysis::entities::{FoodAnalysis, SymptomAnalysis},
    assistant::ports::AssistantService,
    common::{entities::app_errors::CoreError, services::Service},
    plan::entities::{FitnessPlan, NutritionPlan},
    profile::entities::UserProfile,
    storage::ports::KeyValueStorage,
    symptom::value_objects::SymptomType,
};

const INSIGHT_WINDOW: usize = 5;

fn chat_context(profile: &UserProfile) -> Option<String> {
    let disease = profile.disease.as_deref().filter(|d| !d.trim().is_empty())?;
    let age = profile
        .age
        .map(|age| format!("{age} years old"))
        .unwrap_or_else(|| "age unknown".to_string());
    let restrictions = profile
        .dietary_restrictions
        .as_deref()
        .filter(|r| !r.is_empty())
        .map(|r| r.join(", "))
        .unwrap_or_else(|| "none".to_string());

    Some(format!(
        "User profile: {disease}, {age}. Dietary restrictions: {restrictions}"
    ))
}

impl<S, LLM> Service<S, LLM>
where
    S: KeyValueStorage,
    LLM: LLMClient,
{
    fn complete_profile(&self) -> Result<HealthProfile, CoreError> {
        let profile = self.health_store.profile();
        profile.ensure_complete().inspect_err(|e| warn!("{}", e))?;
        Ok(HealthProfile::from(&profile))
    }

    fn logged_symptom_codes(&self) -> Vec<SymptomType> {
        let mut codes: Vec<SymptomType> = Vec::new();
        for symptom in self.health_store.symptoms() {
            if !codes.contains(&symptom.symptom_type) {
                codes.push(symptom.symptom_type);
            }
        }
        codes
    }
}

impl<S, LLM> AssistantService for Service<S, LLM>
where
    S: KeyValueStorage,
    LLM: LLMClient,
{
    async fn request_nutrition_plan(&self) -> Result<NutritionPlan, CoreError> {
        let profile = self.complete_profile()?;
        let plan = self.ai_gateway.generate_nutrition_plan(&profile).await;

        let id = self.health_store.add_nutrition_plan(plan.into())?;
        info!(%id, "nutrition plan saved");
        self.health_store
            .nutrition_plan(id)
            .ok_or(CoreError::InternalServerError)
    }

    async fn request_fitness_plan(&self) -> Result<FitnessPlan, CoreError> {
        let profile = self.complete_profile()?;
        let plan = self.ai_gateway.generate_fitness_plan(&profile).await;

        let id = self.health_store.add_fitness_plan(plan.into())?;
        info!(%id, "fitness plan saved");
        self.health_store
            .fitness_plan(id)
            .ok_or(CoreError::InternalServerError)
    }

    async fn request_symptom_analysis(&self) -> Result<SymptomAnalysis, CoreError> {
        let codes = self.logged_symptom_codes();
        if codes.is_empty() {
            return Err(CoreError::NoSymptomsLogged);
        }
        let profile = self.complete_profile()?.with_symptoms(
            codes.iter().map(|code| code.to_string()).collect(),
        );

        let analysis = self.ai_gateway.analyze_symptoms(&codes, &profile).await;

        let id = self.health_store.add_symptom_analysis(analysis.into())?;
        info!(%id, "symptom analysis saved");
        self.health_store
            .symptom_analysis(id)
            .ok_or(CoreError::InternalServerError)
    }

    async fn request_food_analysis(
        &self,
        food_name: String,
        amount: String,
    ) -> Result<FoodAnalysis, CoreError> {
        let analysis = self
            .ai_gateway
            .calculate_food_calories(&food_name, &amount)
            .await;

        let id = self.health_store.add_food_analysis(analysis.into())?;
        self.health_store
            .food_analysis(id)
            .ok_or(CoreError::InternalServerError)
    }

    async fn request_health_insights(&self) -> Result<Vec<String>, CoreError> {
        let profile = HealthProfile::from(&self.health_store.profile());
        let meals = self.health_store.recent_meals(INSIGHT_WINDOW);
        let symptoms = self.health_store.recent_symptoms(INSIGHT_WINDOW);

        Ok(self
            .ai_gateway
            .get_health_insights(&profile, &meals, &symptoms)
            .await)
    }

    async fn request_tolerance_advice(&self, food_name: String) -> Result<Vec<String>, CoreError> {
        let profile = HealthProfile::from(&self.health_store.profile());
        let needle = food_name.trim().to_lowercase();
        let history: Vec<_> = self
            .health_store
            .meal_tolerances()
            .into_iter()
            .filter(|t| t.food_name.to_lowercase().contains(&needle))
            .collect();

        Ok(self
            .ai_gateway
            .analyze_food_tolerance(&food_name, &history, &profile)
            .await)
    }

    async fn chat(&self, message: String) -> Result<String, CoreError> {
        if message.trim().is_empty() {
            return Err(CoreError::Invalid("message is required".to_string()));
        }
        let context = chat_context(&self.health_store.profile());

        Ok(self
            .ai_gateway
            .chat_with_ai(&message, context.as_deref())
            .await)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use mockall::predicate::function;

    use super::*;
    use crate::{
        domain::{
            ai_gateway::ports::MockLLMClient, profile::value_objects::UserProfileUpdate,
            symptom::entities::NewSymptom,
        },
        infrastructure::storage::MemoryKeyValueStorage,
    };

    type TestService = Service<Arc<MemoryKeyValueStorage>, MockLLMClient>;

    fn service(llm: MockLLMClient) -> TestService {
        Service::new(Arc::new(MemoryKeyValueStorage::new()), llm)
    }

    fn failing_llm() -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("unavailable".to_string())) })
        });
        llm
    }

    fn onboard(service: &TestService) {
        service
            .health_store()
            .update_profile(UserProfileUpdate {
                age: Some(33),
                disease: Some("IBS".to_string()),
                dietary_restrictions: Some(vec!["Lactose".to_string()]),
                ..Default::default()
            })
            .unwrap();
    }

    fn log_symptom(service: &TestService, code: &str, severity: i64) {
        service
            .health_store()
            .add_symptom(NewSymptom {
                symptom_type: SymptomType::from(code),
                severity,
                date: Utc::now(),
                notes: String::new(),
            })
            .unwrap();
    }

    #[tokio::test]
    async fn test_plans_require_complete_profile() {
        let service = service(MockLLMClient::new());

        let result = service.request_nutrition_plan().await;
        assert_eq!(
            result,
            Err(CoreError::IncompleteProfile("disease".to_string()))
        );
        assert!(service.health_store().nutrition_plans().is_empty());
    }

    #[tokio::test]
    async fn test_analysis_requires_symptoms() {
        let service = service(MockLLMClient::new());
        onboard(&service);

        assert_eq!(
            service.request_symptom_analysis().await,
            Err(CoreError::NoSymptomsLogged)
        );
    }

    #[tokio::test]
    async fn test_failing_ai_analysis_is_stored_as_fallback() {
        let service = service(failing_llm());
        service.health_store().clear().unwrap();
        onboard(&service);
        log_symptom(&service, "bloating", 3);

        let analysis = service.request_symptom_analysis().await.unwrap();

        assert!((1..=5).contains(&analysis.severity.value()));
        assert!(!analysis.possible_causes.is_empty());
        assert!(!analysis.recommendations.is_empty());
        assert!(!analysis.related_foods.is_empty());
        assert!(!analysis.warning_signs.is_empty());
        assert_eq!(analysis.symptoms, vec![SymptomType::Bloating]);
        assert_eq!(service.health_store().symptom_analyses(), vec![analysis]);
    }

    #[tokio::test]
    async fn test_gateway_fallback_appended_after_clear() {
        let service = service(failing_llm());
        service.health_store().clear().unwrap();
        log_symptom(&service, "bloating", 3);

        let codes: Vec<SymptomType> = service
            .health_store()
            .symptoms()
            .into_iter()
            .map(|s| s.symptom_type)
            .collect();
        let profile = HealthProfile::from(&service.health_store().profile());
        let analysis = service.ai_gateway().analyze_symptoms(&codes, &profile).await;
        service
            .health_store()
            .add_symptom_analysis(analysis.into())
            .unwrap();

        let stored = service.health_store().symptom_analyses();
        assert_eq!(stored.len(), 1);
        assert!((1..=5).contains(&stored[0].severity.value()));
        assert!(!stored[0].warning_signs.is_empty());
    }

    #[tokio::test]
    async fn test_nutrition_plan_is_appended_with_store_id() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().times(1).returning(|_| {
            Box::pin(async {
                Ok(r#"{"title":"Soft foods week","meals":[{"meal":"Lunch","foods":["Rice"],"calories":400,"notes":""}],"recommendations":["Chew slowly"]}"#.to_string())
            })
        });
        let service = service(llm);
        onboard(&service);

        let plan = service.request_nutrition_plan().await.unwrap();

        assert_eq!(plan.title, "Soft foods week");
        assert_eq!(plan.total_calories(), 400.0);
        let stored = service.health_store().nutrition_plans();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, plan.id);
    }

    #[tokio::test]
    async fn test_symptom_codes_are_deduplicated() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .with(function(|prompt: &String| {
                prompt.contains("- Symptoms: Gas, Cramps\n")
            }))
            .times(1)
            .returning(|_| Box::pin(async { Ok(r#"{"severity": 2}"#.to_string()) }));
        let service = service(llm);
        onboard(&service);
        log_symptom(&service, "gas", 2);
        log_symptom(&service, "cramps", 4);
        log_symptom(&service, "gas", 1);

        let analysis = service.request_symptom_analysis().await.unwrap();

        assert_eq!(analysis.symptoms, vec![SymptomType::Gas, SymptomType::Cramps]);
        assert_eq!(analysis.severity.value(), 2);
    }

    #[tokio::test]
    async fn test_chat_includes_profile_context() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .with(function(|prompt: &String| {
                prompt.starts_with(
                    "Context: User profile: IBS, 33 years old. Dietary restrictions: Lactose",
                )
            }))
            .times(1)
            .returning(|_| Box::pin(async { Ok("Try lactose-free yogurt.".to_string()) }));
        let service = service(llm);
        onboard(&service);

        let reply = service.chat("Any snack ideas?".to_string()).await.unwrap();
        assert_eq!(reply, "Try lactose-free yogurt.");
    }

    #[tokio::test]
    async fn test_food_analysis_fallback_is_stored() {
        let service = service(failing_llm());

        let analysis = service
            .request_food_analysis("Apple".to_string(), "200 g".to_string())
            .await
            .unwrap();

        assert_eq!(analysis.calories, 104.0);
        assert_eq!(service.health_store().food_analyses().len(), 1);
    }

    #[tokio::test]
    async fn test_restart_onboarding_replaces_data() {
        let service = service(MockLLMClient::new());
        service
            .session_store()
            .register("Kim", "kim@example.com", "pw")
            .unwrap();
        log_symptom(&service, "pain", 5);

        let session = service
            .restart_onboarding(UserProfileUpdate {
                age: Some(60),
                disease: Some("Diverticulitis".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(!session.needs_onboarding);
        assert!(service.health_store().symptoms().is_empty());
        assert_eq!(service.health_store().profile().age, Some(60));
    }
}
