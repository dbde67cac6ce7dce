use async_trait::async_trait;
use reqwest::StatusCode;

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::{ChatHistory, ChatMessage};
use business::domain::chat::services::{ChatCompletionService, ExecutionSettings};
use business::domain::kernel::model::KernelFunction;

use crate::client::AzureOpenAIClient;
use crate::wire::{build_request_body, parse_completion};

/// Chat completions against an Azure OpenAI deployment.
pub struct AzureChatCompletion {
    client: AzureOpenAIClient,
}

impl AzureChatCompletion {
    pub fn new(client: AzureOpenAIClient) -> Self {
        Self { client }
    }

    fn map_status(status: StatusCode) -> ChatError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ChatError::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => ChatError::RateLimited,
            other => ChatError::ServiceError(other.as_u16()),
        }
    }
}

#[async_trait]
impl ChatCompletionService for AzureChatCompletion {
    async fn complete(
        &self,
        history: &ChatHistory,
        functions: &[KernelFunction],
        settings: &ExecutionSettings,
    ) -> Result<ChatMessage, ChatError> {
        let body = build_request_body(history, functions, settings);

        tracing::debug!(
            deployment = %self.client.deployment,
            messages = history.len(),
            functions = functions.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header(self.client.auth_header_name(), &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Chat completion request failed");
                ChatError::RequestFailed
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|err| {
            tracing::warn!(error = %err, "Failed to read chat completion response");
            ChatError::RequestFailed
        })?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %text, "Azure OpenAI returned an error");
            return Err(Self::map_status(status));
        }

        let message = parse_completion(&text)?;
        tracing::debug!(
            tool_calls = message.tool_calls.len(),
            "Received chat completion"
        );
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::client::{AzureOpenAIOptions, DEFAULT_API_VERSION};

    #[test]
    fn should_map_http_statuses_to_chat_errors() {
        assert_eq!(
            AzureChatCompletion::map_status(StatusCode::UNAUTHORIZED),
            ChatError::Unauthorized
        );
        assert_eq!(
            AzureChatCompletion::map_status(StatusCode::FORBIDDEN),
            ChatError::Unauthorized
        );
        assert_eq!(
            AzureChatCompletion::map_status(StatusCode::TOO_MANY_REQUESTS),
            ChatError::RateLimited
        );
        assert_eq!(
            AzureChatCompletion::map_status(StatusCode::NOT_FOUND),
            ChatError::ServiceError(404)
        );
    }

    #[tokio::test]
    async fn should_return_request_failed_when_endpoint_unreachable() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = AzureOpenAIClient::new(AzureOpenAIOptions {
            endpoint: "http://127.0.0.1:9".to_string(),
            deployment: "gpt-4o".to_string(),
            api_key: "secret".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(2),
        });
        let completion = AzureChatCompletion::new(client);
        let mut history = ChatHistory::new();
        history.add_user_message("Hello");

        let result = completion
            .complete(&history, &[], &ExecutionSettings::default())
            .await;

        assert_eq!(result.unwrap_err(), ChatError::RequestFailed);
    }
}
