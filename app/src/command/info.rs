use nursebot_config::Config;

/// Strategy for displaying configuration information.
///
/// Prints the config file location and the effective settings, with the
/// Telegram token masked. Falls back to defaults when no file exists.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::config_path()?;
        let exists = path.exists();
        let config = Config::load_or_default()?;

        println!("=== nursebot Configuration ===\n");

        println!("Config file:");
        println!("  Path: {}", path.display());
        println!("  Status: {}", if exists { "found" } else { "missing (using defaults)" });
        println!();

        println!("Server:");
        println!("  Bind: {}", config.server.bind_address());
        println!();

        println!("Telegram:");
        println!("  Enabled: {}", config.telegram.enabled);
        println!("  Token: {}", config.masked_token());
        if config.telegram.allow_from.is_empty() {
            println!("  Allow From: (everyone)");
        } else {
            println!("  Allow From: {}", config.telegram.allow_from.join(", "));
        }
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);

        Ok(())
    }
}
