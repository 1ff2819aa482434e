use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    domain::common::{GutCareConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{llm::GeminiLLMClient, storage::StorageAdapter},
};

pub type GutCareService = Service<Arc<StorageAdapter>, GeminiLLMClient>;

/// Wires storage and the Gemini client into the application service.
pub fn create_service(config: GutCareConfig) -> Result<GutCareService, CoreError> {
    let storage = Arc::new(StorageAdapter::from_config(&config.storage)?);
    info!(backend = ?config.storage.backend, "storage ready");

    let llm_client = GeminiLLMClient::new(&config.llm);
    if !llm_client.is_configured() {
        warn!("no Gemini API key configured, AI features will return fallback content");
    }

    Ok(Service::new(storage, llm_client))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::common::{LLMConfig, StorageBackend, StorageConfig};

    #[test]
    fn test_create_service_with_memory_storage() {
        let service = create_service(GutCareConfig {
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                data_dir: PathBuf::from("unused"),
            },
            llm: LLMConfig::default(),
        })
        .unwrap();

        assert!(service.health_store().snapshot().is_empty());
        assert!(!service.session_store().current().is_authenticated);
    }

    #[test]
    fn test_file_storage_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = GutCareConfig {
            storage: StorageConfig {
                backend: StorageBackend::File,
                data_dir: dir.path().to_path_buf(),
            },
            llm: LLMConfig::default(),
        };

        let service = create_service(config.clone()).unwrap();
        service.session_store().login("sam@example.com", "pw").unwrap();
        drop(service);

        let service = create_service(config).unwrap();
        assert!(service.session_store().current().is_authenticated);
    }
}
