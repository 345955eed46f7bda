//! UI rendering with Ratatui built on top of the ride panel.
//!
//! Frame layout, top to bottom:
//! - header with polling state and backend URL
//! - elevator table
//! - ride form
//! - message line
//! - key binding footer
use anyhow::Result;
use client_frontend_core::{ElevatorRow, RideForm, RideMessage, RidePanel, elevator_rows};
use elevator_core::FloorRange;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};

/// Height of the ride form panel in lines (including borders).
pub const FORM_PANEL_HEIGHT: u16 = 4;

/// Snapshot of everything a frame needs.
pub struct RenderContext<'a> {
    pub endpoint: &'a str,
    pub polling: bool,
    pub rows: Vec<ElevatorRow>,
    pub form: &'a RideForm,
    pub floors: FloorRange,
    pub message: Option<&'a RideMessage>,
}

impl<'a> RenderContext<'a> {
    pub fn from_panel(panel: &'a RidePanel) -> Self {
        Self {
            endpoint: panel.service().endpoint(),
            polling: panel.service().is_polling(),
            rows: elevator_rows(panel.elevators()),
            form: panel.form(),
            floors: panel.floors(),
            message: panel.message(),
        }
    }
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext<'_>) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, ctx))?;
    Ok(())
}

pub fn render_frame(frame: &mut Frame, ctx: &RenderContext<'_>) {
    let theme = RatatuiTheme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(FORM_PANEL_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.endpoint, ctx.polling, &theme);
    widgets::elevators::render(frame, chunks[1], &ctx.rows, &theme);
    widgets::ride_form::render(frame, chunks[2], ctx.form, ctx.floors, &theme);
    widgets::message::render(frame, chunks[3], ctx.message, &theme);
    widgets::footer::render(frame, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::Field;
    use elevator_core::{Direction, ElevatorStatus};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_elevators_form_and_message() {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("test terminal");

        let status = ElevatorStatus {
            id: 1,
            current_floor: 4,
            direction: Direction::Up,
            stops: vec![6, 9],
            move_seconds_remaining: 1.5,
            wait_seconds_remaining: 0.0,
        };
        let mut form = RideForm::new();
        form.set(Field::Pickup, "2");
        let message = RideMessage::error("Elevator busy");

        let ctx = RenderContext {
            endpoint: "http://localhost:5037/api/Elevator",
            polling: true,
            rows: elevator_rows(&[status]),
            form: &form,
            floors: FloorRange::DEFAULT,
            message: Some(&message),
        };

        terminal
            .draw(|frame| render_frame(frame, &ctx))
            .expect("draw should succeed");
        let screen = screen_text(&terminal);

        assert!(screen.contains("Elevator Simulator"));
        assert!(screen.contains("RUNNING"));
        assert!(screen.contains("6 → 9"));
        assert!(screen.contains("floors 1-10"));
        assert!(screen.contains("Elevator busy"));
    }

    #[test]
    fn renders_hint_without_statuses() {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("test terminal");
        let form = RideForm::new();

        let ctx = RenderContext {
            endpoint: "mock://elevator",
            polling: false,
            rows: Vec::new(),
            form: &form,
            floors: FloorRange::DEFAULT,
            message: None,
        };

        terminal
            .draw(|frame| render_frame(frame, &ctx))
            .expect("draw should succeed");
        let screen = screen_text(&terminal);

        assert!(screen.contains("STOPPED"));
        assert!(screen.contains("Press [s] to start"));
    }
}
