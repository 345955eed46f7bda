//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::ElevatorService;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to the backend only through the [`ElevatorService`] they
/// are handed; the composition root keeps ownership of it and shuts polling
/// down once `run` returns.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use client_frontend_core::{Frontend, FrontendConfig, RidePanel};
/// use runtime::ElevatorService;
///
/// struct LogFrontend;
///
/// #[async_trait]
/// impl Frontend for LogFrontend {
///     async fn run(&mut self, service: ElevatorService) -> Result<()> {
///         let mut panel = RidePanel::new(service, FrontendConfig::default());
///         panel.activate();
///         loop {
///             panel.next_update().await;
///             println!("{} elevators", panel.elevators().len());
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, service: ElevatorService) -> Result<()>;
}
