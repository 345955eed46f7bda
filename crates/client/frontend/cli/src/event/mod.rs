//! Event handling for the CLI client.
//!
//! This module contains the event loop that interleaves ride panel updates,
//! keyboard input, and rendering.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
