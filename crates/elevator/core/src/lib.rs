//! Elevator domain types shared across the client.
//!
//! `elevator-core` defines the shapes exchanged with the elevator backend
//! ([`ElevatorStatus`], [`RideRequest`], [`RideResponse`]) and the pure rules a
//! ride request must satisfy before it is sent ([`validation`]). Nothing here
//! performs I/O; the runtime and frontends build on these types.
pub mod ride;
pub mod status;
pub mod validation;

pub use ride::{RideRequest, RideResponse};
pub use status::{Direction, ElevatorId, ElevatorStatus, Floor, InvalidDirection};
pub use validation::{FloorRange, RideValidationError, validate_ride, validate_ride_input};
