//! Mock elevator backend for testing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use elevator_core::{ElevatorStatus, RideRequest, RideResponse};
use tokio::time::{self, Duration};

use crate::api::{ApiError, ElevatorApi};

/// Calls observed by a [`MockElevatorApi`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockCalls {
    pub start: usize,
    pub stop: usize,
    pub status: usize,
    pub rides: Vec<RideRequest>,
}

/// In-memory backend with scripted answers.
///
/// Clones share state, so a test can keep one clone for scripting and
/// inspection while the service owns another.
#[derive(Clone)]
pub struct MockElevatorApi {
    state: Arc<Mutex<MockState>>,
}

struct MockState {
    statuses: Vec<ElevatorStatus>,
    status_error: Option<ApiError>,
    ride_result: Result<RideResponse, ApiError>,
    ride_delay: Duration,
    status_delay: Duration,
    command_delay: Duration,
    start_error: Option<ApiError>,
    stop_error: Option<ApiError>,
    calls: MockCalls,
}

impl MockElevatorApi {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                statuses: Vec::new(),
                status_error: None,
                ride_result: Ok(RideResponse::new("Ride accepted")),
                ride_delay: Duration::ZERO,
                status_delay: Duration::ZERO,
                command_delay: Duration::ZERO,
                start_error: None,
                stop_error: None,
                calls: MockCalls::default(),
            })),
        }
    }

    /// Statuses returned by subsequent polls.
    pub fn set_statuses(&self, statuses: Vec<ElevatorStatus>) {
        self.state().statuses = statuses;
    }

    /// Make subsequent polls fail (`Some`) or succeed again (`None`).
    pub fn fail_status(&self, error: Option<ApiError>) {
        self.state().status_error = error;
    }

    /// Answer for subsequent ride requests.
    pub fn respond_to_rides(&self, result: Result<RideResponse, ApiError>) {
        self.state().ride_result = result;
    }

    /// Delay before a ride request is answered.
    pub fn delay_rides(&self, delay: Duration) {
        self.state().ride_delay = delay;
    }

    /// Delay before a status poll is answered.
    pub fn delay_status(&self, delay: Duration) {
        self.state().status_delay = delay;
    }

    /// Delay before start and stop commands are answered.
    pub fn delay_commands(&self, delay: Duration) {
        self.state().command_delay = delay;
    }

    pub fn fail_start(&self, error: Option<ApiError>) {
        self.state().start_error = error;
    }

    pub fn fail_stop(&self, error: Option<ApiError>) {
        self.state().stop_error = error;
    }

    pub fn calls(&self) -> MockCalls {
        self.state().calls.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockElevatorApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ElevatorApi for MockElevatorApi {
    async fn start(&self) -> Result<(), ApiError> {
        let (result, delay) = {
            let mut state = self.state();
            state.calls.start += 1;
            (state.start_error.clone().map_or(Ok(()), Err), state.command_delay)
        };
        settle_after(delay, result).await
    }

    async fn stop(&self) -> Result<(), ApiError> {
        let (result, delay) = {
            let mut state = self.state();
            state.calls.stop += 1;
            (state.stop_error.clone().map_or(Ok(()), Err), state.command_delay)
        };
        settle_after(delay, result).await
    }

    async fn request_ride(&self, request: &RideRequest) -> Result<RideResponse, ApiError> {
        let (result, delay) = {
            let mut state = self.state();
            state.calls.rides.push(*request);
            (state.ride_result.clone(), state.ride_delay)
        };
        settle_after(delay, result).await
    }

    async fn fetch_status(&self) -> Result<Vec<ElevatorStatus>, ApiError> {
        let (result, delay) = {
            let mut state = self.state();
            state.calls.status += 1;
            let result = match &state.status_error {
                Some(error) => Err(error.clone()),
                None => Ok(state.statuses.clone()),
            };
            (result, state.status_delay)
        };
        settle_after(delay, result).await
    }

    fn endpoint(&self) -> &str {
        "mock://elevator"
    }
}

async fn settle_after<T>(delay: Duration, result: T) -> T {
    if !delay.is_zero() {
        time::sleep(delay).await;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_and_scripted_answers() {
        let mock = MockElevatorApi::new();
        mock.set_statuses(vec![ElevatorStatus::idle(1, 3)]);
        mock.fail_stop(Some(ApiError::Network("down".into())));

        assert!(mock.start().await.is_ok());
        assert!(mock.stop().await.is_err());
        assert_eq!(mock.fetch_status().await.unwrap().len(), 1);
        assert_eq!(
            mock.request_ride(&RideRequest::new(1, 4)).await,
            Ok(RideResponse::new("Ride accepted"))
        );

        let calls = mock.calls();
        assert_eq!((calls.start, calls.stop, calls.status), (1, 1, 1));
        assert_eq!(calls.rides, vec![RideRequest::new(1, 4)]);
    }
}
