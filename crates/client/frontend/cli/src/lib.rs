//! Terminal UI frontend for the elevator simulator.
//!
//! This crate provides a terminal-based user interface built on ratatui and
//! crossterm. It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives an ElevatorService for communication
//! - Does NOT own the backend transport
//! - Drives a RidePanel and renders it after every change

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
