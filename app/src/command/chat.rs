//! Terminal conversation with the admissions script.

use tracing::info;
use uuid::Uuid;

use super::conversation_manager;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Session key to use (a new one is generated if not provided)
    pub session_id: Option<String>,
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
}

/// Strategy for executing the Chat command.
///
/// Interactive mode keeps one session for the whole run; single-message mode
/// sends one message to a fresh session and prints the reply.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let manager = conversation_manager();
        let session_id = input
            .session_id
            .unwrap_or_else(|| format!("cli:{}", Uuid::now_v7()));

        info!("Starting conversation session: {session_id}");

        if let Some(msg) = input.message {
            let result = manager.respond(&session_id, &msg).await?;
            println!("{}", result.response);
        } else {
            manager.run_interactive(&session_id).await?;
        }

        Ok(())
    }
}
