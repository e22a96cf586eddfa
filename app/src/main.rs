#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    ChatInput, ChatStrategy, CommandStrategy, InfoStrategy, InitStrategy, ServeInput,
    ServeStrategy, TelegramInput, TelegramStrategy, TopicsInput, TopicsStrategy, VersionStrategy,
};
use nursebot_config::Config;
use nursebot_core::Language;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "nursebot")]
#[command(about = "Nursing college admissions chatbot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the bot in the terminal
    Chat {
        /// Session key (defaults to a new one)
        #[arg(short = 's', long)]
        session: Option<String>,

        /// Single message to send
        #[arg(short = 'm', long)]
        message: Option<String>,
    },
    /// Run the HTTP API
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Run the Telegram bot
    Telegram {
        /// Bot token (overrides config)
        #[arg(long)]
        token: Option<String>,

        /// Allowed chat ids, comma separated (overrides config)
        #[arg(long, value_delimiter = ',')]
        allow_from: Option<Vec<String>>,
    },
    /// Print the conversation topics as Markdown
    Topics {
        /// Report language: hi or en
        #[arg(short = 'l', long, default_value = "en")]
        lang: Language,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing() -> anyhow::Result<()> {
    let level = Config::load_or_default()
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| "info".to_string());

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&level))?;

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { session, message } => {
            ChatStrategy
                .execute(ChatInput {
                    session_id: session,
                    message,
                })
                .await
        }
        Commands::Serve { host, port } => ServeStrategy.execute(ServeInput { host, port }).await,
        Commands::Telegram { token, allow_from } => {
            TelegramStrategy
                .execute(TelegramInput { token, allow_from })
                .await
        }
        Commands::Topics { lang } => {
            TopicsStrategy
                .execute(TopicsInput { language: lang })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
