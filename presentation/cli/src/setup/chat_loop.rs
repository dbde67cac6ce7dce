use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use business::domain::chat::model::ChatHistory;
use business::domain::chat::use_cases::send_message::{SendMessageParams, SendMessageUseCase};

use crate::console::error_mapper::IntoConsoleMessage;

const USER_PROMPT: &str = "User > ";
const ASSISTANT_PREFIX: &str = "Assistant > ";
const EXIT_COMMAND: &str = "exit";

/// Read-eval-print loop over one conversation.
pub struct ChatLoop<R, W> {
    reader: R,
    writer: W,
    use_case: Arc<dyn SendMessageUseCase>,
    history: ChatHistory,
}

impl<R, W> ChatLoop<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, use_case: Arc<dyn SendMessageUseCase>) -> Self {
        Self {
            reader,
            writer,
            use_case,
            history: ChatHistory::new(),
        }
    }

    /// Runs until the user types `exit` or input ends.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut line = String::new();

        loop {
            self.writer.write_all(USER_PROMPT.as_bytes()).await?;
            self.writer.flush().await?;

            line.clear();
            if self.reader.read_line(&mut line).await? == 0 {
                self.writer.write_all(b"\n").await?;
                break;
            }

            let input = line.trim();
            if input == EXIT_COMMAND {
                break;
            }
            if input.is_empty() {
                continue;
            }

            let params = SendMessageParams {
                message: input.to_string(),
            };
            let output = match self.use_case.execute(&mut self.history, params).await {
                Ok(reply) => format!("{}{}\n", ASSISTANT_PREFIX, reply.content_or_empty()),
                Err(err) => {
                    tracing::warn!(error = %err, "Chat turn failed");
                    format!("Error: {}\n", err.into_console_message())
                }
            };
            self.writer.write_all(output.as_bytes()).await?;
        }

        self.writer.flush().await?;
        Ok(())
    }
}
