//! Background tasks owned by the runtime.
//!
//! The poller is the only worker: it fetches statuses on a fixed interval and
//! publishes each successful result to the status feed.

mod poller;

pub(crate) use poller::Poller;
