use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;
pub mod value_objects;

#[derive(Clone, Debug)]
pub struct GutCareConfig {
    pub storage: StorageConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: "gemini-pro".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: 0.7,
            max_output_tokens: 2048,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Hex-encoded SHA-256 prefix (first 16 bytes) of `value`.
pub fn stable_hash(value: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let hash = hasher.finalize();
    hex::encode(&hash[..16])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_uuid_v7_is_unique_under_rapid_calls() {
        let ids: HashSet<Uuid> = (0..1_000).map(|_| generate_uuid_v7()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn test_stable_hash_is_deterministic() {
        assert_eq!(stable_hash("ada@example.com"), stable_hash("ada@example.com"));
        assert_ne!(stable_hash("ada@example.com"), stable_hash("bob@example.com"));
        assert_eq!(stable_hash("x").len(), 32);
    }
}
