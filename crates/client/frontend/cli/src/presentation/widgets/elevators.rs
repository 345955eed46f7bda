//! Elevator table widget.

use client_frontend_core::{ElevatorRow, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::presentation::theme::RatatuiTheme;

const COLUMNS: [&str; 6] = ["Car", "Floor", "Dir", "Stops", "Move (s)", "Wait (s)"];

/// Render one row per elevator, or a hint when no statuses have arrived.
pub fn render(frame: &mut Frame, area: Rect, rows: &[ElevatorRow], theme: &RatatuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Elevators ({})", rows.len()));

    if rows.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No elevator data. Press [s] to start the simulation.",
            theme.hint(),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title))).style(theme.table_header());

    let body = rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(format!("#{}", row.id)),
            Cell::from(row.floor.to_string()),
            Cell::from(format!("{} {}", row.direction.arrow(), row.direction))
                .style(theme.style_direction(row.direction)),
            Cell::from(row.stops.clone()),
            Cell::from(row.move_seconds.clone()),
            Cell::from(row.wait_seconds.clone()),
        ])
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Min(12),
        Constraint::Length(9),
        Constraint::Length(9),
    ];

    let table = Table::new(body, widths).header(header).block(block);
    frame.render_widget(table, area);
}
