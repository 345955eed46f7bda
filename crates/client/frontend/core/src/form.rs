//! Text-entry state of the ride form.

/// The two inputs of the ride form.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Field {
    #[default]
    Pickup,
    Destination,
}

impl Field {
    pub const fn other(self) -> Self {
        match self {
            Self::Pickup => Self::Destination,
            Self::Destination => Self::Pickup,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pickup => "Pickup floor",
            Self::Destination => "Destination floor",
        }
    }
}

/// Raw user input; parsing happens on submit.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RideForm {
    pickup: String,
    destination: String,
    focus: Field,
}

impl RideForm {
    /// Longest text a field accepts.
    pub const MAX_LEN: usize = 6;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Pickup => &self.pickup,
            Field::Destination => &self.destination,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
    }

    /// Append to the focused field. Only digits and a sign are accepted.
    pub fn push_char(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || c == '-') {
            return false;
        }
        let focus = self.focus;
        let value = self.value_mut(focus);
        if value.len() >= Self::MAX_LEN {
            return false;
        }
        value.push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        let focus = self.focus;
        self.value_mut(focus).pop().is_some()
    }

    /// Empty both fields, keeping focus.
    pub fn clear(&mut self) {
        self.pickup.clear();
        self.destination.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pickup.is_empty() && self.destination.is_empty()
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Pickup => &mut self.pickup,
            Field::Destination => &mut self.destination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = RideForm::new();
        assert!(form.push_char('3'));
        form.toggle_focus();
        assert!(form.push_char('-'));
        assert!(form.push_char('1'));

        assert_eq!(form.value(Field::Pickup), "3");
        assert_eq!(form.value(Field::Destination), "-1");
    }

    #[test]
    fn rejects_non_numeric_and_overlong_input() {
        let mut form = RideForm::new();
        assert!(!form.push_char('a'));
        assert!(!form.push_char(' '));
        for _ in 0..RideForm::MAX_LEN {
            assert!(form.push_char('9'));
        }
        assert!(!form.push_char('9'));
        assert_eq!(form.value(Field::Pickup).len(), RideForm::MAX_LEN);
    }

    #[test]
    fn clear_keeps_focus() {
        let mut form = RideForm::new();
        form.set(Field::Pickup, "4");
        form.set(Field::Destination, "7");
        form.set_focus(Field::Destination);

        form.clear();
        assert!(form.is_empty());
        assert_eq!(form.focus(), Field::Destination);
        assert!(!form.backspace());
    }
}
