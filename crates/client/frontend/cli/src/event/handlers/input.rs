//! Input handling (keyboard and form editing).

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop {
    /// Drain pending terminal events. Returns `true` when the user quits.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            let quit = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_press(key, terminal)?
                }
                TermEvent::Resize(_, _) => {
                    self.render(terminal)?;
                    false
                }
                _ => false,
            };
            if quit {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Handle key press and dispatch to the ride panel.
    pub(in crate::event) fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return Ok(true);
            }
            KeyAction::Edit(ch) => {
                if !self.panel.form_mut().push_char(ch) {
                    return Ok(false);
                }
            }
            KeyAction::Backspace => {
                if !self.panel.form_mut().backspace() {
                    return Ok(false);
                }
            }
            KeyAction::NextField | KeyAction::PrevField => {
                self.panel.form_mut().toggle_focus();
            }
            KeyAction::Submit => self.panel.submit(),
            KeyAction::StartSimulation => {
                tracing::info!("Starting simulation");
                self.panel.start_simulation();
            }
            KeyAction::StopSimulation => {
                tracing::info!("Stopping simulation");
                self.panel.stop_simulation();
            }
            KeyAction::None => return Ok(false),
        }

        self.render(terminal)?;
        Ok(false)
    }
}
