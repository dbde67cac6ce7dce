use std::time::Duration;

use openai::client::{AzureOpenAIOptions, DEFAULT_API_VERSION};

pub const DEPLOYMENT_NAME_VAR: &str = "AZURE_OPENAI_DEPLOYMENT_NAME";
pub const API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
pub const ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
pub const API_VERSION_VAR: &str = "AZURE_OPENAI_API_VERSION";
pub const TIMEOUT_VAR: &str = "AZURE_OPENAI_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const VISIBLE_KEY_CHARS: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}. Please check your .env file.", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
    #[error("{name} must be a positive number of seconds, got '{value}'.")]
    InvalidTimeout { name: &'static str, value: String },
}

/// Configuration for Azure OpenAI access.
#[derive(Debug, Clone)]
pub struct AzureOpenAIConfig {
    pub deployment_name: String,
    pub api_key: String,
    pub endpoint: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl AzureOpenAIConfig {
    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - AZURE_OPENAI_DEPLOYMENT_NAME, AZURE_OPENAI_API_KEY, AZURE_OPENAI_ENDPOINT: required
    /// - AZURE_OPENAI_API_VERSION: API version (default: "2024-06-01")
    /// - AZURE_OPENAI_TIMEOUT_SECS: HTTP timeout (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let deployment_name = read(DEPLOYMENT_NAME_VAR);
        let api_key = read(API_KEY_VAR);
        let endpoint = read(ENDPOINT_VAR);

        let missing: Vec<&'static str> = [
            (DEPLOYMENT_NAME_VAR, deployment_name.is_none()),
            (API_KEY_VAR, api_key.is_none()),
            (ENDPOINT_VAR, endpoint.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| name)
        .collect();

        let (Some(deployment_name), Some(api_key), Some(endpoint)) =
            (deployment_name, api_key, endpoint)
        else {
            return Err(ConfigError::MissingVariables(missing));
        };

        let timeout = match read(TIMEOUT_VAR) {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        name: TIMEOUT_VAR,
                        value: raw,
                    });
                }
            },
        };

        Ok(Self {
            deployment_name,
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_version: read(API_VERSION_VAR).unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout,
        })
    }

    /// Key prefix safe to print, e.g. `sk-ab...`.
    pub fn masked_api_key(&self) -> String {
        let visible: String = self.api_key.chars().take(VISIBLE_KEY_CHARS).collect();
        format!("{}...", visible)
    }

    pub fn client_options(&self) -> AzureOpenAIOptions {
        AzureOpenAIOptions {
            endpoint: self.endpoint.clone(),
            deployment: self.deployment_name.clone(),
            api_key: self.api_key.clone(),
            api_version: self.api_version.clone(),
            timeout: self.timeout,
        }
    }
}
