//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use runtime::ElevatorService;

/// Builder for constructing a Client with proper validation.
///
/// Both the service and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    service: Option<ElevatorService>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the elevator service (required).
    ///
    /// The service owns the backend transport and the status poller.
    pub fn service(mut self, service: ElevatorService) -> Self {
        self.service = Some(service);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Service is not set (required)
    /// - Frontend is not set (required)
    pub fn build(self) -> Result<Client> {
        let service = self
            .service
            .context("Service is required. Use .service() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { service, frontend })
    }
}
