//! HTTP transport for the elevator backend.
//!
//! Implements [`runtime::ElevatorApi`] over the backend's JSON REST API:
//!
//! ```text
//! POST {base}/start     body {}            → ignored
//! POST {base}/stop      body {}            → ignored
//! POST {base}/request   body RideRequest   → RideResponse
//! GET  {base}/status                       → [ElevatorStatus]
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use client_backend_http::{HttpConfig, HttpElevatorApi};
//! use runtime::ElevatorService;
//!
//! let api = HttpElevatorApi::new(HttpConfig::from_env())?;
//! let service = ElevatorService::new(api);
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpElevatorApi;
pub use config::{DEFAULT_BASE_URL, HttpConfig};
pub use error::HttpSetupError;
