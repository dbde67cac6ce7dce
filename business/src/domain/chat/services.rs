use async_trait::async_trait;

use crate::domain::kernel::model::KernelFunction;

use super::errors::ChatError;
use super::model::{ChatHistory, ChatMessage};

/// Whether the model may call kernel functions during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionChoiceBehavior {
    /// Functions are advertised and calls are executed automatically, for at
    /// most `max_auto_invoke_attempts` round trips.
    Auto { max_auto_invoke_attempts: usize },
    /// No functions are advertised.
    None,
}

impl Default for FunctionChoiceBehavior {
    fn default() -> Self {
        FunctionChoiceBehavior::Auto {
            max_auto_invoke_attempts: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionSettings {
    pub function_choice: FunctionChoiceBehavior,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Service port for a chat completion backend.
///
/// Returns exactly one assistant message. When `functions` is non-empty the
/// message may carry tool calls instead of (or alongside) text.
#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn complete(
        &self,
        history: &ChatHistory,
        functions: &[KernelFunction],
        settings: &ExecutionSettings,
    ) -> Result<ChatMessage, ChatError>;
}
