//! HTTP API command.

use std::sync::Arc;

use parla_config::Config;
use parla_session::SessionStore;
use tracing::info;

use super::load_content;

/// Input parameters for the Serve command strategy.
#[derive(Debug, Clone, Copy)]
pub struct ServeInput {
    /// Optional port override
    pub port: Option<u16>,
}

/// Strategy for running the HTTP API.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if let Some(port) = input.port {
            config.server.port = port;
        }

        let store = load_content(&config)?;
        let sessions = Arc::new(SessionStore::new(store));

        info!(
            "Serving on {}:{} (CORS origin: {})",
            config.server.host,
            config.server.port,
            config.server.frontend_url.as_deref().unwrap_or("any")
        );

        parla_server::serve(&config.server, sessions).await
    }
}
