use crate::{Command, Result, TelegramBot};
use nursebot_core::{Language, MessageKey, message};
use teloxide::{requests::Requester, types::Message};
use tracing::{info, warn};

/// Handle bot commands
pub async fn handle_command(bot: TelegramBot, msg: Message, cmd: Command) -> Result<()> {
    let chat_id = msg.chat.id.0;
    let username = msg
        .from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown");

    match cmd {
        Command::Start => {
            info!("[@{username}] Command: /start");
            bot.reset_session(chat_id).await?;
            // An empty first message just triggers the greeting.
            let result = bot.process_message(chat_id, "").await?;
            bot.bot.send_message(msg.chat.id, result.response).await?;
        }
        Command::Reset => {
            info!("[@{username}] Command: /reset");
            bot.reset_session(chat_id).await?;
            bot.bot
                .send_message(msg.chat.id, Command::reset_text())
                .await?;
        }
        Command::Help => {
            info!("[@{username}] Command: /help");
            bot.bot
                .send_message(msg.chat.id, Command::help_text())
                .await?;
        }
    }

    Ok(())
}

/// Handle any message (commands or regular text)
pub async fn handle_message(bot: TelegramBot, msg: Message) -> Result<()> {
    let chat_id = msg.chat.id.0;
    let username = msg
        .from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown");

    if !bot.is_allowed(chat_id) {
        warn!("[@{username}] Ignoring message from unauthorized chat {chat_id}");
        return Ok(());
    }

    // Stickers, photos and the like carry no text to classify.
    let Some(text) = msg.text() else {
        bot.bot
            .send_message(msg.chat.id, message(MessageKey::Default, Language::English))
            .await?;
        return Ok(());
    };

    if let Some(cmd) = Command::parse_from_text(text) {
        return handle_command(bot, msg, cmd).await;
    }

    info!("[@{username}] Message: {text}");

    let result = bot.process_message(chat_id, text).await?;

    info!(
        "[@{username}] {} -> {} ({})",
        result.turn.from, result.turn.to, result.turn.outcome
    );

    bot.bot.send_message(msg.chat.id, result.response).await?;

    Ok(())
}
