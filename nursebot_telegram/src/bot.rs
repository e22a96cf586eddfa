use crate::{Command, Error, Result};
use nursebot_conversation::{ConversationManager, TurnResult};
use std::{sync::Arc, time::Duration};
use teloxide::prelude::*;
use tokio::time::sleep;
use tracing::{info, warn};

/// Session key for a Telegram chat.
fn session_key(chat_id: i64) -> String {
    format!("telegram:{chat_id}")
}

/// Parse allowed chat ids, skipping anything that is not an integer.
fn parse_allowed_chats(allowed_chats: &[String]) -> Vec<i64> {
    allowed_chats
        .iter()
        .filter_map(|s| match s.trim().parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("Ignoring invalid chat id in allow_from: {s}");
                None
            }
        })
        .collect()
}

/// Telegram bot relaying chat messages to the admissions script
pub struct TelegramBot {
    /// Teloxide bot instance
    pub bot: Bot,
    /// Conversation state for every chat
    pub conversations: Arc<ConversationManager>,
    /// Allowed chat IDs
    allowed_chats: Vec<i64>,
}

impl TelegramBot {
    /// Create a new Telegram bot
    pub fn new(
        token: String,
        conversations: Arc<ConversationManager>,
        allowed_chats: &[String],
    ) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(Error::Config("Telegram bot token is empty".into()));
        }

        Ok(Self {
            bot: Bot::new(token),
            conversations,
            allowed_chats: parse_allowed_chats(allowed_chats),
        })
    }

    /// Check if a chat is allowed
    #[must_use]
    pub fn is_allowed(&self, chat_id: i64) -> bool {
        self.allowed_chats.is_empty() || self.allowed_chats.contains(&chat_id)
    }

    fn authorize(&self, chat_id: i64) -> Result<()> {
        if self.is_allowed(chat_id) {
            Ok(())
        } else {
            Err(Error::Unauthorized(chat_id))
        }
    }

    /// Reset session for a chat
    pub async fn reset_session(&self, chat_id: i64) -> Result<()> {
        self.authorize(chat_id)?;
        self.conversations.reset(&session_key(chat_id)).await?;
        Ok(())
    }

    /// Process a message and get response
    pub async fn process_message(&self, chat_id: i64, text: &str) -> Result<TurnResult> {
        self.authorize(chat_id)?;
        Ok(self
            .conversations
            .respond(&session_key(chat_id), text)
            .await?)
    }

    /// Test connection to Telegram API with backoff retry.
    /// Starts at 2s, increases by 2s each attempt, max 10s delay.
    /// Retries indefinitely until connection succeeds.
    async fn test_connection(&self) -> Result<()> {
        const INITIAL_DELAY_SECS: u64 = 2;
        const MAX_DELAY_SECS: u64 = 10;

        let mut attempt = 1u64;
        loop {
            match self.bot.get_me().await {
                Ok(bot_user) => {
                    info!(
                        "Connected to Telegram API: @{} (id: {})",
                        bot_user
                            .user
                            .username
                            .unwrap_or_else(|| "no username".to_string()),
                        bot_user.user.id
                    );
                    return Ok(());
                }
                Err(e) => {
                    // 2s, 4s, 6s, 8s, 10s, 10s, ...
                    let delay_secs = (INITIAL_DELAY_SECS * attempt).min(MAX_DELAY_SECS);
                    let delay = Duration::from_secs(delay_secs);

                    warn!("Connection attempt {attempt} failed: {e}. Retrying in {delay_secs}s...");

                    if attempt == 1 {
                        warn!("This may be due to:");
                        warn!("  - Network connectivity issues");
                        warn!("  - Firewall blocking api.telegram.org");
                        warn!("  - Invalid bot token");
                    }

                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Run the bot
    pub async fn run(self) -> Result<()> {
        use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
        use teloxide::dptree;
        use teloxide::types::Update;

        self.test_connection().await?;

        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!("Failed to register bot commands: {e}");
        }

        let bot = self.bot.clone();

        let schema = dptree::entry().branch(Update::filter_message().endpoint({
            let bot_clone = self.clone();
            move |_bot: Bot, msg: teloxide::types::Message| {
                let bot_clone = bot_clone.clone();
                async move { crate::handler::handle_message(bot_clone, msg).await }
            }
        }));

        Dispatcher::builder(bot, schema)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}

impl Clone for TelegramBot {
    fn clone(&self) -> Self {
        Self {
            bot: self.bot.clone(),
            conversations: Arc::clone(&self.conversations),
            allowed_chats: self.allowed_chats.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursebot_core::Stage;
    use nursebot_session::SessionManager;

    fn conversations() -> Arc<ConversationManager> {
        Arc::new(ConversationManager::new(Arc::new(SessionManager::new())))
    }

    #[test]
    fn test_empty_token_rejected() {
        let result = TelegramBot::new(String::new(), conversations(), &[]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_allow_list() {
        let allowed = vec!["42".to_string(), "oops".to_string(), " -7 ".to_string()];
        let bot = TelegramBot::new("123:abc".to_string(), conversations(), &allowed).unwrap();
        assert!(bot.is_allowed(42));
        assert!(bot.is_allowed(-7));
        assert!(!bot.is_allowed(1));

        let open = TelegramBot::new("123:abc".to_string(), conversations(), &[]).unwrap();
        assert!(open.is_allowed(1));
    }

    #[tokio::test]
    async fn test_process_and_reset() {
        let bot = TelegramBot::new("123:abc".to_string(), conversations(), &[]).unwrap();

        let greeting = bot.process_message(5, "hi").await.unwrap();
        assert_eq!(greeting.session.stage, Stage::AdmissionInterest);
        assert_eq!(greeting.session.id, "telegram:5");

        bot.process_message(5, "yes").await.unwrap();
        bot.reset_session(5).await.unwrap();
        let restarted = bot.process_message(5, "yes").await.unwrap();
        assert_eq!(restarted.session.stage, Stage::AdmissionInterest);
    }

    #[tokio::test]
    async fn test_unauthorized_chat() {
        let allowed = vec!["1".to_string()];
        let bot = TelegramBot::new("123:abc".to_string(), conversations(), &allowed).unwrap();
        let result = bot.process_message(2, "hi").await;
        assert!(matches!(result, Err(Error::Unauthorized(2))));
    }
}
