//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Append a character to the focused field.
    Edit(char),
    /// Delete the last character of the focused field.
    Backspace,
    NextField,
    PrevField,
    /// Validate the form and request a ride.
    Submit,
    StartSimulation,
    StopSimulation,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into panel commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
            KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        if raw.is_ascii_digit() || raw == '-' {
            return KeyAction::Edit(raw);
        }

        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            's' => KeyAction::StartSimulation,
            'x' => KeyAction::StopSimulation,
            _ => KeyAction::None,
        }
    }
}
