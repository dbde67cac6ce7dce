use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::{ChatHistory, ChatMessage};

pub struct SendMessageParams {
    pub message: String,
}

/// Runs one conversational turn against `history`.
///
/// On success the history holds the user message, any function-call
/// exchanges, and the final assistant message, which is also returned. On
/// failure the history is left as it was before the call.
#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        history: &mut ChatHistory,
        params: SendMessageParams,
    ) -> Result<ChatMessage, ChatError>;
}
