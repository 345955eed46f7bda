//! Header widget displaying the polling state and backend URL.

use client_frontend_core::PresentationMapper;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel.
pub fn render(frame: &mut Frame, area: Rect, endpoint: &str, polling: bool, theme: &RatatuiTheme) {
    let state = if polling { "● RUNNING" } else { "○ STOPPED" };

    let text = vec![Line::from(vec![
        Span::styled(state, theme.style_polling(polling)),
        Span::raw(" | Backend: "),
        Span::styled(endpoint.to_string(), theme.hint()),
    ])];

    let title = Span::styled(" Elevator Simulator ", theme.title());
    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area);
}
