use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::{ChatHistory, ChatMessage, ToolCall};
use crate::domain::chat::services::{
    ChatCompletionService, ExecutionSettings, FunctionChoiceBehavior,
};
use crate::domain::chat::use_cases::send_message::{SendMessageParams, SendMessageUseCase};
use crate::domain::kernel::model::KernelArguments;
use crate::domain::kernel::registry::Kernel;
use crate::domain::logger::Logger;

pub struct SendMessageUseCaseImpl {
    pub kernel: Arc<Kernel>,
    pub completion: Arc<dyn ChatCompletionService>,
    pub settings: ExecutionSettings,
    pub logger: Arc<dyn Logger>,
}

fn error_payload(message: impl std::fmt::Display) -> String {
    json!({ "error": message.to_string() }).to_string()
}

impl SendMessageUseCaseImpl {
    async fn invoke_tool(&self, call: &ToolCall) -> String {
        let arguments: KernelArguments = if call.arguments.trim().is_empty() {
            KernelArguments::new()
        } else {
            match serde_json::from_str::<Value>(&call.arguments) {
                Ok(Value::Object(map)) => map,
                _ => {
                    self.logger.warn(&format!(
                        "Discarding call to {}: arguments are not a JSON object",
                        call.function_name
                    ));
                    return error_payload(format!(
                        "Arguments for function '{}' must be a JSON object.",
                        call.function_name
                    ));
                }
            }
        };

        self.logger
            .debug(&format!("Invoking function {}", call.function_name));

        match self.kernel.invoke(&call.function_name, arguments).await {
            Ok(value) => value.to_string(),
            Err(err) => {
                self.logger
                    .warn(&format!("Function {} failed: {}", call.function_name, err));
                error_payload(err)
            }
        }
    }

    async fn run_turn(&self, history: &mut ChatHistory) -> Result<ChatMessage, ChatError> {
        let max_attempts = match self.settings.function_choice {
            FunctionChoiceBehavior::Auto {
                max_auto_invoke_attempts,
            } => max_auto_invoke_attempts,
            FunctionChoiceBehavior::None => 0,
        };
        let functions = if max_attempts > 0 {
            self.kernel.functions()
        } else {
            Vec::new()
        };

        for attempt in 1..=max_attempts {
            let response = self
                .completion
                .complete(history, &functions, &self.settings)
                .await?;

            if !response.has_tool_calls() {
                history.add_message(response.clone());
                return Ok(response);
            }

            self.logger.debug(&format!(
                "Model requested {} function call(s) (attempt {}/{})",
                response.tool_calls.len(),
                attempt,
                max_attempts
            ));

            let calls = response.tool_calls.clone();
            history.add_message(response);
            for call in calls {
                let result = self.invoke_tool(&call).await;
                history.add_message(ChatMessage::tool_result(call.id, result));
            }
        }

        if max_attempts > 0 {
            self.logger
                .warn("Function call limit reached, requesting a final answer without functions");
        }

        let response = self
            .completion
            .complete(history, &[], &self.settings)
            .await?;
        // The API rejects assistant messages with neither content nor tool calls.
        let content = response.content_or_empty().to_string();
        let response = ChatMessage {
            content: Some(content),
            tool_calls: Vec::new(),
            ..response
        };
        history.add_message(response.clone());
        Ok(response)
    }
}

#[async_trait]
impl SendMessageUseCase for SendMessageUseCaseImpl {
    async fn execute(
        &self,
        history: &mut ChatHistory,
        params: SendMessageParams,
    ) -> Result<ChatMessage, ChatError> {
        if params.message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let checkpoint = history.len();
        history.add_user_message(params.message);

        match self.run_turn(history).await {
            Ok(response) => {
                self.logger.info(&format!(
                    "Turn completed, history has {} messages",
                    history.len()
                ));
                Ok(response)
            }
            Err(err) => {
                self.logger.error(&format!("Chat turn failed: {}", err));
                history.truncate(checkpoint);
                Err(err)
            }
        }
    }
}
