use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{
    ai_gateway::{ports::LLMClient, services::AiGateway},
    common::entities::app_errors::CoreError,
    dashboard::{entities::DashboardSummary, services::summarize},
    health_store::services::HealthStore,
    profile::value_objects::UserProfileUpdate,
    session::{entities::SessionState, services::SessionStore},
    storage::ports::KeyValueStorage,
};

/// Application service shared by every entry point.
pub struct Service<S, LLM>
where
    S: KeyValueStorage,
    LLM: LLMClient,
{
    pub(crate) health_store: Arc<HealthStore<S>>,
    pub(crate) session_store: Arc<SessionStore<S>>,
    pub(crate) ai_gateway: Arc<AiGateway<LLM>>,
}

impl<S, LLM> Clone for Service<S, LLM>
where
    S: KeyValueStorage,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            health_store: Arc::clone(&self.health_store),
            session_store: Arc::clone(&self.session_store),
            ai_gateway: Arc::clone(&self.ai_gateway),
        }
    }
}

impl<S, LLM> Service<S, LLM>
where
    S: KeyValueStorage + Clone,
    LLM: LLMClient,
{
    pub fn new(storage: S, llm_client: LLM) -> Self {
        Self {
            health_store: Arc::new(HealthStore::new(storage.clone())),
            session_store: Arc::new(SessionStore::new(storage)),
            ai_gateway: Arc::new(AiGateway::new(llm_client)),
        }
    }
}

impl<S, LLM> Service<S, LLM>
where
    S: KeyValueStorage,
    LLM: LLMClient,
{
    pub fn health_store(&self) -> &HealthStore<S> {
        &self.health_store
    }

    pub fn session_store(&self) -> &SessionStore<S> {
        &self.session_store
    }

    pub fn ai_gateway(&self) -> &AiGateway<LLM> {
        &self.ai_gateway
    }

    /// Onboarding completion: wipes earlier health data, stores the new
    /// profile, and marks onboarding as done.
    pub fn restart_onboarding(
        &self,
        profile: UserProfileUpdate,
    ) -> Result<SessionState, CoreError> {
        self.health_store.clear()?;
        self.health_store.update_profile(profile)?;
        let session = self.session_store.complete_onboarding()?;
        info!("onboarding completed");
        Ok(session)
    }

    pub fn dashboard(&self, today: NaiveDate) -> DashboardSummary {
        summarize(&self.health_store.snapshot(), today)
    }
}
