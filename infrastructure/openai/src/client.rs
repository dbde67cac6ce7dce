use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_API_VERSION: &str = "2024-06-01";

/// Connection settings for one Azure OpenAI deployment.
#[derive(Debug, Clone)]
pub struct AzureOpenAIOptions {
    /// Resource base URL, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,
    pub deployment: String,
    pub api_key: String,
    pub api_version: String,
    pub timeout: Duration,
}

/// Shared Azure OpenAI HTTP client configuration.
pub struct AzureOpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub endpoint: String,
    pub deployment: String,
    pub api_version: String,
}

impl AzureOpenAIClient {
    pub fn new(options: AzureOpenAIOptions) -> Self {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: options.api_key,
            endpoint: options.endpoint.trim_end_matches('/').to_string(),
            deployment: options.deployment,
            api_version: options.api_version,
        }
    }

    /// Name of the authentication header. Azure uses a raw key, not a bearer token.
    pub fn auth_header_name(&self) -> &'static str {
        "api-key"
    }

    /// Returns the chat completions endpoint URL for the deployment.
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(endpoint: &str) -> AzureOpenAIOptions {
        AzureOpenAIOptions {
            endpoint: endpoint.to_string(),
            deployment: "gpt-4o".to_string(),
            api_key: "secret".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn should_build_deployment_scoped_chat_url() {
        let client = AzureOpenAIClient::new(options("https://contoso.openai.azure.com"));

        assert_eq!(
            client.chat_completions_url(),
            "https://contoso.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-06-01"
        );
    }

    #[test]
    fn should_trim_trailing_slashes_from_endpoint() {
        let client = AzureOpenAIClient::new(options("https://contoso.openai.azure.com//"));

        assert_eq!(client.endpoint, "https://contoso.openai.azure.com");
    }
}
