//! Event loop orchestrating ride panel updates, user input, and rendering.
//!
//! Two sources are raced on every iteration:
//! - `RidePanel::next_update` (polled statuses, ride answers, message clears)
//! - a fixed-rate tick that drains pending key presses

use anyhow::Result;
use client_frontend_core::{PanelUpdate, RidePanel};
use tokio::time::{self, MissedTickBehavior};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui};

/// Event loop owning the ride panel for the lifetime of the UI.
pub struct EventLoop {
    pub(crate) panel: RidePanel,
    pub(crate) input: InputHandler,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(panel: RidePanel, cli_config: CliConfig) -> Self {
        Self {
            panel,
            input: InputHandler::new(),
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.panel.activate();
        self.render(terminal)?;

        let mut input_tick = time::interval(self.cli_config.ui.tick_interval);
        input_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                update = self.panel.next_update() => {
                    self.handle_panel_update(update, terminal)?;
                }
                _ = input_tick.tick() => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        self.panel.deactivate();
        Ok(())
    }

    fn handle_panel_update(&mut self, update: PanelUpdate, terminal: &mut Tui) -> Result<()> {
        if update == PanelUpdate::FeedClosed {
            tracing::warn!("Status feed closed");
        }
        self.render(terminal)
    }
}
