//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::{MessageKind, PresentationMapper};
use elevator_core::Direction;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_direction(&self, direction: Direction) -> Self::Style {
        let color = match direction {
            Direction::Up => Color::LightGreen,
            Direction::Down => Color::LightYellow,
            Direction::Idle => Color::DarkGray,
        };
        Style::default().fg(color)
    }

    fn style_message(&self, kind: MessageKind) -> Self::Style {
        match kind {
            MessageKind::Success => Style::default().fg(Color::Green),
            MessageKind::Error => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn style_polling(&self, polling: bool) -> Self::Style {
        if polling {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl RatatuiTheme {
    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn focused_field(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
