//! Backend abstraction.
use async_trait::async_trait;
use elevator_core::{ElevatorStatus, RideRequest, RideResponse};

use super::errors::Result;

/// Remote elevator service.
///
/// Implementations map each call to one request against the backend; no
/// retries or caching happen at this layer.
///
/// # Implementations
///
/// - `HttpElevatorApi` (client-backend-http): reqwest over JSON
/// - [`crate::MockElevatorApi`]: in-memory, behind the `mock` feature
#[async_trait]
pub trait ElevatorApi: Send + Sync {
    /// Ask the backend to start advancing its simulation.
    async fn start(&self) -> Result<()>;

    /// Ask the backend to stop advancing its simulation.
    async fn stop(&self) -> Result<()>;

    /// Submit a ride request.
    async fn request_ride(&self, request: &RideRequest) -> Result<RideResponse>;

    /// Fetch the current status of every elevator.
    async fn fetch_status(&self) -> Result<Vec<ElevatorStatus>>;

    /// Human-readable location of the backend, for display and logs.
    fn endpoint(&self) -> &str;
}
