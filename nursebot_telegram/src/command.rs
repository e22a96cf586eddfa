use teloxide::types::BotCommand;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    Help,
}

impl Command {
    fn all() -> Vec<BotCommand> {
        vec![
            BotCommand {
                command: "start".to_string(),
                description: "Start the admissions conversation".to_string(),
            },
            BotCommand {
                command: "reset".to_string(),
                description: "Forget this conversation".to_string(),
            },
            BotCommand {
                command: "help".to_string(),
                description: "Show help".to_string(),
            },
        ]
    }

    #[must_use]
    pub fn bot_commands() -> Vec<BotCommand> {
        Self::all()
    }

    #[must_use]
    pub fn parse_from_text(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();

        // Remove bot mention if present (e.g., "/start@my_bot")
        let text = text.split('@').next().unwrap_or(&text).to_string();

        match text.as_str() {
            "/start" => Some(Self::Start),
            "/reset" => Some(Self::Reset),
            "/help" => Some(Self::Help),
            _ => None,
        }
    }

    #[must_use]
    pub const fn help_text() -> &'static str {
        r"
🏥 Nursing College Admissions Bot

Commands:
/start - Start the conversation from the beginning
/reset - Forget this conversation
/help  - Show this help

Answer the questions with 'Yes' / 'No' (or 'Haan' / 'Nahi').
हिन्दी में लिखेंगे तो जवाब हिन्दी में मिलेगा।
"
    }

    #[must_use]
    pub const fn reset_text() -> &'static str {
        "Conversation reset. Send any message to start again."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse_from_text("/start"), Some(Command::Start));
        assert_eq!(Command::parse_from_text(" /RESET "), Some(Command::Reset));
        assert_eq!(Command::parse_from_text("/help@nurse_bot"), Some(Command::Help));
        assert_eq!(Command::parse_from_text("yes"), None);
        assert_eq!(Command::parse_from_text("/unknown"), None);
    }

    #[test]
    fn test_bot_commands_listed() {
        let names: Vec<_> = Command::bot_commands()
            .into_iter()
            .map(|c| c.command)
            .collect();
        assert_eq!(names, vec!["start", "reset", "help"]);
    }
}
