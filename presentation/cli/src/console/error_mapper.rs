use business::domain::chat::errors::ChatError;

/// Turns a domain error into a line suitable for the terminal.
pub trait IntoConsoleMessage {
    fn into_console_message(self) -> String;
}

impl IntoConsoleMessage for ChatError {
    fn into_console_message(self) -> String {
        match self {
            ChatError::EmptyMessage => "Please enter a message.".to_string(),
            ChatError::RequestFailed => {
                "Could not reach Azure OpenAI. Check AZURE_OPENAI_ENDPOINT and your network connection."
                    .to_string()
            }
            ChatError::Unauthorized => {
                "Azure OpenAI rejected the credentials. Check AZURE_OPENAI_API_KEY.".to_string()
            }
            ChatError::RateLimited => {
                "Azure OpenAI rate limit reached. Wait a moment and try again.".to_string()
            }
            ChatError::ServiceError(status) => {
                format!("Azure OpenAI returned HTTP {}.", status)
            }
            ChatError::InvalidResponse => {
                "Azure OpenAI returned a response that could not be understood.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_include_status_code_for_service_errors() {
        assert_eq!(
            ChatError::ServiceError(503).into_console_message(),
            "Azure OpenAI returned HTTP 503."
        );
    }

    #[test]
    fn should_point_at_api_key_when_unauthorized() {
        assert!(
            ChatError::Unauthorized
                .into_console_message()
                .contains("AZURE_OPENAI_API_KEY")
        );
    }
}
