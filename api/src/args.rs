use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gutcare_core::domain::common::{GutCareConfig, LLMConfig, StorageBackend, StorageConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "gutcare-api", version, about = "GutCare HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "tls-cert", env = "TLS_CERT")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long = "tls-key", env = "TLS_KEY")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-pro")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_base_url: String,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f32,

    #[arg(long = "llm-max-output-tokens", env = "LLM_MAX_OUTPUT_TOKENS", default_value_t = 2048)]
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageKind {
    File,
    Memory,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long = "storage-backend", env = "STORAGE_BACKEND", value_enum, default_value_t = StorageKind::File)]
    pub backend: StorageKind,

    #[arg(long = "data-dir", env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<StorageKind> for StorageBackend {
    fn from(kind: StorageKind) -> Self {
        match kind {
            StorageKind::File => StorageBackend::File,
            StorageKind::Memory => StorageBackend::Memory,
        }
    }
}

impl From<Args> for GutCareConfig {
    fn from(args: Args) -> Self {
        Self {
            storage: StorageConfig {
                backend: args.storage.backend.into(),
                data_dir: args.storage.data_dir,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                temperature: args.llm.temperature,
                max_output_tokens: args.llm.max_output_tokens,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["gutcare-api"]);

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "");
        assert_eq!(args.server.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(args.storage.backend, StorageKind::File);
        assert!(!args.log.json);
    }

    #[test]
    fn test_into_config() {
        let args = Args::parse_from([
            "gutcare-api",
            "--storage-backend",
            "memory",
            "--gemini-model",
            "gemini-1.5-flash",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = GutCareConfig::from(args);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.llm.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.llm.max_output_tokens, 2048);
    }
}
