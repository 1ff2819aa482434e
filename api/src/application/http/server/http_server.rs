use std::sync::{Arc, LazyLock};

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, LOCATION},
    },
    routing::get,
};
use axum_prometheus::{PrometheusMetricLayer, metrics_exporter_prometheus::PrometheusHandle};
use gutcare_core::{application::create_service, domain::common::GutCareConfig};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info_span, warn};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use super::{app_state::AppState, config::get_config, openapi::api_doc};
use crate::{
    application::http::{
        ai::router::ai_routes, analysis::router::analysis_routes,
        dashboard::router::dashboard_routes, events::router::events_routes, health::health_routes,
        meal::router::meal_routes, meal_tolerance::router::meal_tolerance_routes,
        plan::router::plan_routes, profile::router::profile_routes,
        session::router::session_routes, store::router::store_routes,
        symptom::router::symptom_routes,
    },
    args::Args,
};

// The Prometheus recorder is process-global and can only be installed once.
static METRICS: LazyLock<(PrometheusMetricLayer<'static>, PrometheusHandle)> =
    LazyLock::new(PrometheusMetricLayer::pair);

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = GutCareConfig::from(args.as_ref().clone());
    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        });

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| warn!(origin, "ignoring invalid allowed origin"))
                .ok()
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT, LOCATION])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = METRICS.clone();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = api_doc();
    openapi.paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = Router::new()
        .merge(Scalar::with_url(
            format!("{root_path}/scalar"),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{root_path}/swagger-ui"))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{root_path}/redoc"), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{root_path}/rapidoc")))
        .route(&format!("{root_path}/config"), get(get_config))
        .merge(health_routes(&root_path))
        .merge(profile_routes(state.clone()))
        .merge(store_routes(state.clone()))
        .merge(symptom_routes(state.clone()))
        .merge(meal_routes(state.clone()))
        .merge(meal_tolerance_routes(state.clone()))
        .merge(plan_routes(state.clone()))
        .merge(analysis_routes(state.clone()))
        .merge(ai_routes(state.clone()))
        .merge(session_routes(state.clone()))
        .merge(dashboard_routes(state.clone()))
        .merge(events_routes(state.clone()))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use clap::Parser;
    use serde_json::{Value, json};

    use super::*;

    async fn server() -> TestServer {
        let args = Arc::new(Args::parse_from([
            "gutcare-api",
            "--storage-backend",
            "memory",
            "--gemini-api-key",
            "",
        ]));
        let state = state(args).await.unwrap();
        TestServer::new(router(state).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_health_and_config() {
        let server = server().await;

        let health = server.get("/health").await;
        health.assert_status_ok();
        health.assert_json(&json!({ "status": "ok" }));

        let config: Value = server.get("/config").await.json();
        assert_eq!(config["storage_backend"], "memory");
        assert_eq!(config["ai_enabled"], false);
    }

    #[tokio::test]
    async fn test_symptom_severity_is_clamped() {
        let server = server().await;

        let response = server
            .post("/symptoms")
            .json(&json!({ "type": "bloating", "severity": 9, "notes": "after lunch" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["severity"], 5);
        assert_eq!(body["data"]["type"], "bloating");

        let listed: Value = server.get("/symptoms").await.json();
        assert_eq!(listed["data"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_invalid_bodies_are_rejected() {
        let server = server().await;

        server
            .post("/symptoms")
            .json(&json!({ "type": "", "severity": 3 }))
            .expect_failure()
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .post("/meal-tolerances")
            .json(&json!({ "foodName": "Milk", "tolerated": false }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_VALIDATION");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let server = server().await;

        server
            .delete("/meals/0190b8f2-7c1a-7d4e-9a2b-3c4d5e6f7a8b")
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_meal_round_trip() {
        let server = server().await;

        let created: Value = server
            .post("/meals")
            .json(&json!({ "name": "Oatmeal", "calories": 310, "mealType": "breakfast" }))
            .await
            .json();
        let id = created["data"]["id"].as_str().unwrap().to_string();

        server
            .delete(&format!("/meals/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        let listed: Value = server.get("/meals").await.json();
        assert_eq!(listed["data"], json!([]));
    }

    #[tokio::test]
    async fn test_plan_generation_needs_onboarding() {
        let server = server().await;

        server
            .post("/nutrition-plans/generate")
            .expect_failure()
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        server
            .post("/session/onboarding")
            .json(&json!({ "disease": "IBS", "age": 41, "dietaryRestrictions": ["Gluten"] }))
            .await
            .assert_status_ok();

        let response = server.post("/nutrition-plans/generate").await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["title"], "7-Day Gentle Nutrition Plan");

        let listed: Value = server.get("/nutrition-plans").await.json();
        assert_eq!(listed["data"][0]["id"], body["data"]["id"]);
    }

    #[tokio::test]
    async fn test_session_flow() {
        let server = server().await;

        let registered: Value = server
            .post("/session/register")
            .json(&json!({ "email": "Ana@Example.com", "password": "secret1" }))
            .await
            .json();
        assert_eq!(registered["data"]["isAuthenticated"], true);
        assert_eq!(registered["data"]["needsOnboarding"], true);
        assert_eq!(registered["data"]["user"]["name"], "Ana");

        let logged_out: Value = server.post("/session/logout").await.json();
        assert_eq!(logged_out["data"]["isAuthenticated"], false);

        let logged_in: Value = server
            .post("/session/login")
            .json(&json!({ "email": "ana@example.com", "password": "x" }))
            .await
            .json();
        assert_eq!(logged_in["data"]["user"]["id"], registered["data"]["user"]["id"]);
        assert_eq!(logged_in["data"]["needsOnboarding"], false);

        server
            .post("/session/login")
            .json(&json!({ "email": "not-an-email", "password": "x" }))
            .expect_failure()
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard_and_store_clear() {
        let server = server().await;

        for calories in [200, 401] {
            server
                .post("/meals")
                .json(&json!({ "name": "Soup", "calories": calories, "mealType": "lunch" }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let dashboard: Value = server.get("/dashboard").await.json();
        assert_eq!(dashboard["data"]["averageCalories"], 301.0);
        assert_eq!(dashboard["data"]["todayCalories"], 601.0);
        assert_eq!(dashboard["data"]["counts"]["meals"], 2);

        server
            .delete("/store")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        let store: Value = server.get("/store").await.json();
        assert_eq!(store["data"]["meals"], json!([]));
    }

    #[tokio::test]
    async fn test_food_analysis_uses_offline_estimate() {
        let server = server().await;

        let response = server
            .post("/food-analyses/generate")
            .json(&json!({ "foodName": "Apple", "amount": "200 g" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["calories"], 104.0);
    }

    #[tokio::test]
    async fn test_store_changes_reach_broadcast_channel() {
        let args = Arc::new(Args::parse_from(["gutcare-api", "--storage-backend", "memory"]));
        let state = state(args).await.unwrap();
        let mut receiver = state.events.subscribe();

        state
            .service
            .health_store()
            .update_profile(Default::default())
            .unwrap();

        let change = receiver.try_recv().unwrap();
        assert_eq!(change.revision, 1);
    }
}
