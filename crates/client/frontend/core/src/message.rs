//! Ride feedback shown to the user.
use elevator_core::{RideResponse, RideValidationError};
use runtime::ApiError;

/// Whether a message reports success or a problem.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The single feedback line of the ride form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RideMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl RideMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error)
    }

    /// Message for an answered ride request. Busy answers count as errors.
    pub fn from_response(response: RideResponse) -> Self {
        let kind = if response.is_busy() {
            MessageKind::Error
        } else {
            MessageKind::Success
        };
        Self::new(response.message, kind)
    }

    pub fn from_failure(error: &ApiError) -> Self {
        Self::error(error.detail())
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

impl From<RideValidationError> for RideMessage {
    fn from(error: RideValidationError) -> Self {
        Self::error(error.to_string())
    }
}
