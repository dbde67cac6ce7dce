use std::env;
use std::path::PathBuf;

use super::azure_openai_config::{AzureOpenAIConfig, ConfigError};

pub const CATALOG_PATH_VAR: &str = "AZURE_DOCS_CATALOG_PATH";

pub struct AppConfig {
    pub azure_openai: AzureOpenAIConfig,
    /// Replaces the built-in knowledge base when set.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            azure_openai: AzureOpenAIConfig::from_env()?,
            catalog_path: env::var(CATALOG_PATH_VAR)
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
