//! Event handler implementations for EventLoop.
//!
//! - `input`: Keyboard input and form editing
//! - `rendering`: Terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod input;
mod rendering;
