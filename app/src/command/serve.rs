use nursebot_config::Config;
use nursebot_server::AppState;
use tracing::info;

use super::session_storage;

/// Input for the HTTP server command. Flags override the config file.
#[derive(Debug, Clone)]
pub struct ServeInput {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Strategy for running the HTTP API.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut server = Config::load_or_default()?.server;
        if let Some(host) = input.host {
            server.host = host;
        }
        if let Some(port) = input.port {
            server.port = port;
        }

        info!("Starting HTTP server on {}", server.bind_address());
        let state = AppState::new(session_storage());
        nursebot_server::serve(&server.bind_address(), state).await
    }
}
