//! Status polling worker.
//!
//! Design principles:
//! - Fixed-rate timer; the first fetch happens one interval after spawn
//! - Each tick spawns its own fetch, so a slow backend never delays the timer
//! - Overlapping fetches are not sequenced: whichever settles last is published
//! - Fetches still in flight when the poller is dropped run to completion but
//!   their results are discarded
//! - A failed fetch is logged and the loop keeps going

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{debug, trace, warn};

use crate::api::ElevatorApi;
use crate::events::StatusFeed;

/// Handle to a running polling loop.
///
/// Dropping the handle stops the timer. Fetches already in flight are left to
/// finish but never publish.
pub(crate) struct Poller {
    task: JoinHandle<()>,
    cancelled: Arc<AtomicBool>,
}

impl Poller {
    /// Spawn the polling loop on the current tokio runtime.
    pub(crate) fn spawn(api: Arc<dyn ElevatorApi>, feed: StatusFeed, interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        debug!(interval_ms = interval.as_millis() as u64, "Starting status poller");

        let cancelled = Arc::new(AtomicBool::new(false));
        let task = tokio::spawn(run(api, feed, interval, Arc::clone(&cancelled)));
        Self { task, cancelled }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        self.task.abort();
    }
}

async fn run(
    api: Arc<dyn ElevatorApi>,
    feed: StatusFeed,
    interval: Duration,
    cancelled: Arc<AtomicBool>,
) {
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let api = Arc::clone(&api);
        let feed = feed.clone();
        let cancelled = Arc::clone(&cancelled);
        tokio::spawn(async move {
            match api.fetch_status().await {
                Ok(_) if cancelled.load(Ordering::Acquire) => {
                    debug!("Discarding status poll that settled after cancellation");
                }
                Ok(statuses) => {
                    trace!(elevators = statuses.len(), "Polled elevator status");
                    feed.publish(statuses);
                }
                Err(e) => {
                    warn!("Error polling elevator status: {}", e);
                }
            }
        });
    }
}
