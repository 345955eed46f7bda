//! Top-level client orchestrating the elevator service and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ ElevatorService (backend commands and status polling)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend only ever sees a clone of the service; the client keeps its
//! own handle so polling can be shut down however the frontend exits.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::ElevatorService;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives the service and frontend
/// 2. `Client::run()` transfers control to the frontend (blocking)
/// 3. On frontend exit, status polling is cancelled without contacting the backend
pub struct Client {
    service: ElevatorService,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits, then stop polling.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, after polling has been shut down.
    pub async fn run(self) -> Result<()> {
        let Client {
            service,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(service.clone()).await;

        service.shutdown();

        frontend_result
    }
}
