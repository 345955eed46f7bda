//! Status publication.
//!
//! The runtime publishes exactly one kind of event: the full list of elevator
//! statuses from the latest successful poll. Subscribers only ever need the
//! most recent list, so the feed keeps a single value instead of a queue.

mod feed;

pub use feed::{StatusFeed, StatusSubscription};
