//! Service façade over the elevator backend.
//!
//! [`ElevatorService`] owns the polling worker and the status feed. It is
//! cheap to clone; every clone drives the same poller and publishes to the
//! same feed.

use std::env;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use elevator_core::{ElevatorStatus, Floor, RideRequest, RideResponse};
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{debug, error, info};

use crate::api::{ApiError, ElevatorApi};
use crate::events::{StatusFeed, StatusSubscription};
use crate::workers::Poller;

/// Poll interval used when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Service configuration.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub poll_interval: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ServiceConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ELEVATOR_POLL_INTERVAL_MS` - Status poll interval (default: 1000, min: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("ELEVATOR_POLL_INTERVAL_MS") {
            config.poll_interval = Duration::from_millis(ms.max(1));
        }

        config
    }
}

/// Client-facing handle to the elevator backend.
///
/// # Lifecycle
///
/// 1. [`start_simulation`](Self::start_simulation) installs the poller and
///    tells the backend to start
/// 2. every successful poll replaces the list seen by [`subscribe`](Self::subscribe)
/// 3. [`stop_simulation`](Self::stop_simulation) removes the poller, tells the
///    backend to stop and, once it confirms, publishes an empty list
#[derive(Clone)]
pub struct ElevatorService {
    api: Arc<dyn ElevatorApi>,
    feed: StatusFeed,
    poller: Arc<Mutex<Option<Poller>>>,
}

impl ElevatorService {
    pub fn new(api: impl ElevatorApi + 'static) -> Self {
        Self::from_arc(Arc::new(api))
    }

    pub fn from_arc(api: Arc<dyn ElevatorApi>) -> Self {
        Self {
            api,
            feed: StatusFeed::new(),
            poller: Arc::new(Mutex::new(None)),
        }
    }

    /// Send a ride request from `from_floor` to `to_floor`.
    ///
    /// Floors are not validated here; callers validate first.
    pub async fn request_ride(
        &self,
        from_floor: Floor,
        to_floor: Floor,
    ) -> Result<RideResponse, ApiError> {
        let request = RideRequest::new(from_floor, to_floor);
        debug!(
            pickup = request.pickup_floor,
            destination = request.destination_floor,
            direction = %request.desired_direction,
            "Requesting ride"
        );

        self.api.request_ride(&request).await
    }

    /// Begin polling statuses and tell the backend to start.
    ///
    /// The poller is installed before this returns; the start command runs in
    /// a spawned task whose handle resolves once the backend answered. Does
    /// nothing if a poller is already running. A failed start command is
    /// logged; polling continues regardless.
    pub fn start_simulation(&self, poll_interval: Duration) -> JoinHandle<()> {
        {
            let mut poller = self.lock_poller();
            if poller.is_some() {
                debug!("Status polling already active, ignoring start");
                return tokio::spawn(async {});
            }
            *poller = Some(Poller::spawn(
                Arc::clone(&self.api),
                self.feed.clone(),
                poll_interval,
            ));
        }

        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            match api.start().await {
                Ok(()) => info!("Simulation started on backend"),
                Err(e) => error!("Error starting simulation: {}", e),
            }
        })
    }

    /// Stop polling and tell the backend to stop.
    ///
    /// Polling ends before this returns, and polls still in flight are
    /// discarded. The stop command runs in a spawned task; the published list
    /// is reset to empty only once the backend confirms.
    pub fn stop_simulation(&self) -> JoinHandle<()> {
        if self.lock_poller().take().is_some() {
            debug!("Status polling stopped");
        }

        let api = Arc::clone(&self.api);
        let feed = self.feed.clone();
        tokio::spawn(async move {
            match api.stop().await {
                Ok(()) => {
                    info!("Simulation stopped on backend");
                    feed.reset();
                }
                Err(e) => error!("Error stopping simulation: {}", e),
            }
        })
    }

    /// Stop polling without contacting the backend.
    pub fn shutdown(&self) {
        if self.lock_poller().take().is_some() {
            debug!("Status polling cancelled on shutdown");
        }
    }

    pub fn is_polling(&self) -> bool {
        self.lock_poller().is_some()
    }

    /// Subscribe to polled statuses, starting at the current list.
    pub fn subscribe(&self) -> StatusSubscription {
        self.feed.subscribe()
    }

    /// Snapshot of the most recently published list.
    pub fn statuses(&self) -> Vec<ElevatorStatus> {
        self.feed.current()
    }

    pub fn endpoint(&self) -> &str {
        self.api.endpoint()
    }

    fn lock_poller(&self) -> MutexGuard<'_, Option<Poller>> {
        self.poller.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
