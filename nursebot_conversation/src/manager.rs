//! Conversation manager for the admissions script.

use nursebot_core::{Session, SessionStorage, Turn, advance};
use nursebot_session::SessionManager;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during conversation management.
///
/// The engine itself cannot fail; these come from the storage backend and
/// from terminal I/O in interactive mode.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("Session storage error: {0}")]
    SessionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result of processing one user message.
#[derive(Debug, Clone, Serialize)]
pub struct TurnResult {
    /// Reply text to relay to the user
    pub response: String,
    /// What the engine did
    pub turn: Turn,
    /// Session state after the turn
    pub session: Session,
}

/// Drives sessions from a [`SessionStorage`] through the engine.
pub struct ConversationManager<S = Arc<dyn SessionStorage>>
where
    S: Send + Sync,
{
    storage: S,
}

impl Default for ConversationManager<Arc<SessionManager>> {
    fn default() -> Self {
        Self::new(Arc::new(SessionManager::new()))
    }
}

impl<S> ConversationManager<S>
where
    S: SessionStorage + Send + Sync,
{
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Process a single message for `session_id`.
    ///
    /// Unknown ids start a new conversation. Concurrent calls for the same
    /// id are not serialized; the last save wins.
    pub async fn respond(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<TurnResult, ConversationError> {
        let session = self
            .storage
            .get_or_create(session_id)
            .await
            .map_err(|e| ConversationError::SessionError(e.to_string()))?;

        let (session, turn) = advance(session, message);

        self.storage
            .save(session.clone())
            .await
            .map_err(|e| ConversationError::SessionError(e.to_string()))?;

        debug!(
            "Turn {} for session {session_id}: {} -> {}",
            session.turns, turn.from, turn.to
        );

        Ok(TurnResult {
            response: turn.response.to_string(),
            turn,
            session,
        })
    }

    /// Forget a session. Returns whether it existed.
    pub async fn reset(&self, session_id: &str) -> Result<bool, ConversationError> {
        let existed = self
            .storage
            .delete(session_id)
            .await
            .map_err(|e| ConversationError::SessionError(e.to_string()))?;
        info!("Reset session {session_id} (existed: {existed})");
        Ok(existed)
    }

    /// Current state of a session, if it exists.
    pub async fn session(&self, session_id: &str) -> Result<Option<Session>, ConversationError> {
        self.storage
            .get(session_id)
            .await
            .map_err(|e| ConversationError::SessionError(e.to_string()))
    }

    pub async fn list_sessions(&self) -> Result<Vec<String>, ConversationError> {
        self.storage
            .list()
            .await
            .map_err(|e| ConversationError::SessionError(e.to_string()))
    }

    /// Run an interactive conversation on stdin/stdout.
    ///
    /// `exit`, `quit` and `q` leave; `reset` starts the script over.
    pub async fn run_interactive(&self, session_id: &str) -> Result<(), ConversationError> {
        println!("=== Admissions chat: {session_id} ===");
        println!("Type 'reset' to start over, 'exit' or 'quit' to leave.\n");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if matches!(input, "exit" | "quit" | "q") {
                break;
            }

            if input == "reset" {
                self.reset(session_id).await?;
                println!("\nConversation reset.\n");
                continue;
            }

            match self.respond(session_id, input).await {
                Ok(result) => {
                    println!("\n{}\n", result.response);
                    if result.session.is_finished() && result.turn.from != result.turn.to {
                        println!("(Conversation finished. Type 'reset' to start over.)\n");
                    }
                }
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        if let Some(session) = self.session(session_id).await? {
            println!(
                "\nSession ended at stage '{}' after {} messages.",
                session.stage, session.turns
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursebot_core::Stage;

    fn manager() -> ConversationManager<Arc<SessionManager>> {
        ConversationManager::default()
    }

    #[tokio::test]
    async fn test_respond_persists_session() {
        let manager = manager();
        let result = manager.respond("u", "hi").await.unwrap();
        assert_eq!(result.session.stage, Stage::AdmissionInterest);

        let stored = manager.session("u").await.unwrap().unwrap();
        assert_eq!(stored.stage, Stage::AdmissionInterest);
        assert_eq!(stored.turns, 1);
    }

    #[tokio::test]
    async fn test_reset_starts_over() {
        let manager = manager();
        manager.respond("u", "hi").await.unwrap();
        manager.respond("u", "yes").await.unwrap();

        assert!(manager.reset("u").await.unwrap());
        assert!(manager.session("u").await.unwrap().is_none());
        assert!(!manager.reset("u").await.unwrap());

        let result = manager.respond("u", "yes").await.unwrap();
        assert_eq!(result.session.stage, Stage::AdmissionInterest);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let manager = manager();
        manager.respond("a", "hi").await.unwrap();
        manager.respond("a", "yes").await.unwrap();
        manager.respond("b", "hi").await.unwrap();

        assert_eq!(
            manager.session("a").await.unwrap().unwrap().stage,
            Stage::BiologyCheck
        );
        assert_eq!(
            manager.session("b").await.unwrap().unwrap().stage,
            Stage::AdmissionInterest
        );
        assert_eq!(manager.list_sessions().await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_dyn_storage() {
        let storage: Arc<dyn SessionStorage> = Arc::new(SessionManager::new());
        let manager: ConversationManager = ConversationManager::new(storage);
        let result = manager.respond("x", "").await.unwrap();
        assert_eq!(result.turn.to, Stage::AdmissionInterest);
    }
}
