//! Footer widget displaying key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![
        Span::raw("[0-9/-] Edit | "),
        Span::raw("[Tab/↑↓] Switch field | "),
        Span::raw("[Enter] Request ride | "),
        Span::raw("[s] Start | "),
        Span::raw("[x] Stop | "),
        Span::raw("[q/Esc] Quit"),
    ])];

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
