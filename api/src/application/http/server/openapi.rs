use utoipa::OpenApi;

use super::config::__path_get_config;
use crate::application::http::{
    ai::router::AiApiDoc, analysis::router::AnalysisApiDoc, dashboard::router::DashboardApiDoc,
    events::router::EventsApiDoc, health::HealthApiDoc, meal::router::MealApiDoc,
    meal_tolerance::router::MealToleranceApiDoc, plan::router::PlanApiDoc,
    profile::router::ProfileApiDoc, session::router::SessionApiDoc, store::router::StoreApiDoc,
    symptom::router::SymptomApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GutCare API",
        description = "Health tracking store and AI assistant for digestive conditions"
    ),
    paths(get_config),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/profile", api = ProfileApiDoc),
        (path = "/store", api = StoreApiDoc),
        (path = "/symptoms", api = SymptomApiDoc),
        (path = "/meals", api = MealApiDoc),
        (path = "/meal-tolerances", api = MealToleranceApiDoc),
        (path = "/ai", api = AiApiDoc),
        (path = "/session", api = SessionApiDoc),
        (path = "/dashboard", api = DashboardApiDoc),
        (path = "/events", api = EventsApiDoc),
    )
)]
pub struct ApiDoc;

/// Plans and analyses span several top-level paths, so they are merged
/// rather than nested.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
        .merge_from(PlanApiDoc::openapi())
        .merge_from(AnalysisApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_feature() {
        let doc = api_doc();

        for path in [
            "/config",
            "/profile",
            "/symptoms/{id}",
            "/meal-tolerances",
            "/nutrition-plans/generate",
            "/food-analyses/{id}",
            "/ai/chat",
            "/session/onboarding",
            "/events",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
