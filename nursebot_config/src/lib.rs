//! Configuration file handling for nursebot.

mod schema;

pub use schema::{Config, LoggingConfig, ServerConfig, TelegramConfig};
