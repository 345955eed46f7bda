//! Status/command runtime for the elevator simulator client.
//!
//! This crate mediates all communication with the remote elevator backend.
//! Consumers hold an [`ElevatorService`] to start and stop the backend
//! simulation, request rides, and subscribe to the most recently polled list of
//! elevator statuses.
//!
//! Modules are organized by responsibility:
//! - [`api`] defines the backend abstraction and its error type
//! - [`events`] provides the latest-value status feed
//! - [`service`] hosts the service façade and its configuration
//! - `workers` keeps the polling task internal to the crate
pub mod api;
pub mod events;
pub mod service;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

mod workers;

pub use api::{ApiError, ElevatorApi};
pub use events::{StatusFeed, StatusSubscription};
pub use service::{DEFAULT_POLL_INTERVAL, ElevatorService, ServiceConfig};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCalls, MockElevatorApi};
