use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_DIR: &str = "nursebot";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl ServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    const fn default_port() -> u16 {
        5000
    }

    /// `host:port` string suitable for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct TelegramConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub token: String,
    /// Chat ids allowed to talk to the bot. Empty means everyone.
    #[serde(default)]
    pub allow_from: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default `tracing` filter, overridden by `RUST_LOG`.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'nursebot init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    /// Load the config file if there is one, defaults otherwise.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {e}", path.display()))?;
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Template written by `nursebot init`.
    #[must_use]
    pub const fn template() -> &'static str {
        r#"{
  "server": {
    "host": "0.0.0.0",
    "port": 5000
  },
  "telegram": {
    "enabled": false,
    "token": "your-telegram-bot-token-here",
    "allow_from": []
  },
  "logging": {
    "level": "info"
  }
}"#
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, Self::template())?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Run 'nursebot chat' to try the conversation in the terminal");
        println!("   2. Run 'nursebot serve' to start the HTTP API");
        println!("   3. For Telegram, set telegram.token and telegram.enabled, then run 'nursebot telegram'");
        println!();
        println!("🔧 Configuration options:");
        println!("   - server.host / server.port: HTTP bind address");
        println!("   - telegram.allow_from: chat ids allowed to use the bot (empty = all)");
        println!("   - logging.level: default log filter (RUST_LOG overrides it)");
        println!();
        Ok(())
    }

    /// Token with everything but the ends hidden.
    #[must_use]
    pub fn masked_token(&self) -> String {
        let token = &self.telegram.token;
        let chars: Vec<char> = token.chars().collect();
        if chars.len() > 8 {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{head}...{tail}")
        } else {
            "***".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = serde_json::from_str(Config::template()).unwrap();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(!config.telegram.enabled);
    }

    #[test]
    fn test_missing_sections_default() {
        let config: Config = serde_json::from_str(r#"{"server": {"port": 8080}}"#).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.logging.level, "info");
        assert!(config.telegram.allow_from.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("nursebot-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(
            &path,
            r#"{"telegram": {"enabled": true, "token": "abc", "allow_from": ["42"]}}"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.telegram.enabled);
        assert_eq!(config.telegram.allow_from, vec!["42"]);

        std::fs::write(&path, "not json").unwrap();
        assert!(Config::load_from(&path).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_masked_token() {
        let mut config = Config::default();
        assert_eq!(config.masked_token(), "***");
        config.telegram.token = "1234567890:ABCDEFGH".to_string();
        assert_eq!(config.masked_token(), "1234...EFGH");
    }
}
