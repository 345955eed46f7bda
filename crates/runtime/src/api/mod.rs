//! Public runtime API surface.
//!
//! The backend is reached only through [`ElevatorApi`], so the service and the
//! frontends can be exercised against an in-memory implementation.

pub mod backend;
pub mod errors;

pub use backend::ElevatorApi;
pub use errors::ApiError;
