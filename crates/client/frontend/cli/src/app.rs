//! Glue code tying the elevator service, ride panel, and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{Frontend, FrontendConfig, RidePanel};
use runtime::ElevatorService;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

/// Terminal frontend.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, service: ElevatorService) -> Result<()> {
        tracing::info!("CLI frontend starting (backend: {})", service.endpoint());

        let panel = RidePanel::new(service, self.frontend_config.clone());
        let event_loop = EventLoop::new(panel, self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}
