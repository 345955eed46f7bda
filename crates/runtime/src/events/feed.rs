//! Latest-value status feed.

use std::sync::Arc;

use elevator_core::ElevatorStatus;
use tokio::sync::watch;

/// Publisher side of the status stream.
///
/// Holds the most recently published list; each publish replaces it
/// wholesale. Cloning shares the same underlying channel.
#[derive(Clone)]
pub struct StatusFeed {
    tx: Arc<watch::Sender<Vec<ElevatorStatus>>>,
}

impl StatusFeed {
    /// Creates a feed whose current value is an empty list.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx: Arc::new(tx) }
    }

    /// Replace the current list and wake every subscriber.
    ///
    /// Succeeds even when nobody is subscribed.
    pub fn publish(&self, statuses: Vec<ElevatorStatus>) {
        self.tx.send_replace(statuses);
    }

    /// Publish an empty list.
    pub fn reset(&self) {
        self.publish(Vec::new());
    }

    /// Subscribe to the stream.
    ///
    /// The subscription starts at the current value; see
    /// [`StatusSubscription::latest`].
    pub fn subscribe(&self) -> StatusSubscription {
        StatusSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Snapshot of the current list.
    pub fn current(&self) -> Vec<ElevatorStatus> {
        self.tx.borrow().clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for StatusFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of a [`StatusFeed`].
///
/// Dropping the subscription unsubscribes. A slow subscriber skips
/// intermediate lists and only observes the newest one.
pub struct StatusSubscription {
    rx: watch::Receiver<Vec<ElevatorStatus>>,
}

impl StatusSubscription {
    /// The current list, marking it as seen.
    pub fn latest(&mut self) -> Vec<ElevatorStatus> {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for a list newer than the last one seen.
    ///
    /// Returns `None` once every publisher is gone.
    pub async fn next(&mut self) -> Option<Vec<ElevatorStatus>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Whether a list has been published since the last one seen.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}
