use serde::{Deserialize, Serialize};

/// Storage key of the domain store document.
pub const HEALTH_STORAGE_KEY: &str = "health-storage";

/// Storage key of the session (authentication and onboarding) document.
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Envelope written under every storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedDocument<T> {
    pub state: T,
    pub version: u32,
}
