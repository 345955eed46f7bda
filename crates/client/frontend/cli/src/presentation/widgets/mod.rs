//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads panel state and renders to a terminal frame.
//! Widgets follow these principles:
//! - Read-only access to state (immutable)
//! - No side effects or state mutations
//! - Framework-specific (Ratatui) but styled through the PresentationMapper theme

pub mod elevators;
pub mod footer;
pub mod header;
pub mod message;
pub mod ride_form;
