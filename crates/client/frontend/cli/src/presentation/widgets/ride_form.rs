//! Ride request form widget.

use client_frontend_core::{Field, RideForm};
use elevator_core::FloorRange;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render both floor inputs, highlighting the focused one.
pub fn render(frame: &mut Frame, area: Rect, form: &RideForm, floors: FloorRange, theme: &RatatuiTheme) {
    let lines: Vec<Line> = [Field::Pickup, Field::Destination]
        .into_iter()
        .map(|field| field_line(form, field, theme))
        .collect();

    let title = format!("Request a ride (floors {}-{})", floors.min(), floors.max());
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area);
}

fn field_line<'a>(form: &'a RideForm, field: Field, theme: &RatatuiTheme) -> Line<'a> {
    let focused = form.focus() == field;
    let value = form.value(field);

    let input = if focused {
        Span::styled(format!(" {}_ ", value), theme.focused_field())
    } else {
        Span::raw(format!(" {} ", value))
    };

    Line::from(vec![
        Span::raw(if focused { "> " } else { "  " }),
        Span::raw(format!("{:<18}", field.label())),
        input,
    ])
}
