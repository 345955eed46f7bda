//! Cross-frontend primitives for presenting the elevator simulator.
//!
//! Houses the ride panel component, its form and message types, and the
//! view-model rows that both the CLI and future graphical clients can reuse.
pub mod config;
pub mod form;
pub mod frontend;
pub mod message;
pub mod panel;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use form::{Field, RideForm};
pub use frontend::Frontend;
pub use message::{MessageKind, RideMessage};
pub use panel::{PanelUpdate, RidePanel};
pub use view_model::{ElevatorRow, PresentationMapper, elevator_rows};
