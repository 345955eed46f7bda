//! Message line widget for ride feedback.

use client_frontend_core::{PresentationMapper, RideMessage};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, message: Option<&RideMessage>, theme: &RatatuiTheme) {
    let line = match message {
        Some(message) => Line::from(Span::styled(
            message.text.clone(),
            theme.style_message(message.kind),
        )),
        None => Line::default(),
    };

    let paragraph = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Message"));

    frame.render_widget(paragraph, area);
}
