//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use nursebot_conversation::ConversationManager;
use nursebot_core::SessionStorage;
use nursebot_session::SessionManager;
use std::sync::Arc;

mod chat;
mod info;
mod init;
mod serve;
mod telegram;
mod topics;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use serve::{ServeInput, ServeStrategy};
pub use telegram::{TelegramInput, TelegramStrategy};
pub use topics::{TopicsInput, TopicsStrategy};
pub use version::VersionStrategy;

/// Fresh in-memory session store, shared by whatever front end runs.
fn session_storage() -> Arc<dyn SessionStorage> {
    Arc::new(SessionManager::new())
}

fn conversation_manager() -> Arc<ConversationManager> {
    Arc::new(ConversationManager::new(session_storage()))
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters are passed without boxing or runtime casting.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
