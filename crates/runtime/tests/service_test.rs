use elevator_core::{Direction, ElevatorStatus, RideRequest, RideResponse};
use runtime::{ApiError, ElevatorService, MockElevatorApi};
use tokio::time::{self, Duration, Instant};

const POLL: Duration = Duration::from_millis(1000);

fn service() -> (ElevatorService, MockElevatorApi) {
    let mock = MockElevatorApi::new();
    (ElevatorService::new(mock.clone()), mock)
}

fn fleet(floor: i32) -> Vec<ElevatorStatus> {
    vec![ElevatorStatus::idle(1, floor), ElevatorStatus::idle(2, floor + 1)]
}

#[tokio::test(start_paused = true)]
async fn test_start_polls_on_interval() {
    let (service, mock) = service();
    mock.set_statuses(fleet(3));

    service.start_simulation(POLL).await.expect("start command should settle");
    assert!(service.is_polling());
    assert_eq!(mock.calls().start, 1);

    // First fetch happens one interval after start, not immediately.
    time::sleep(Duration::from_millis(500)).await;
    assert_eq!(mock.calls().status, 0);
    assert!(service.statuses().is_empty());

    time::sleep(Duration::from_millis(3000)).await;
    assert_eq!(mock.calls().status, 3);
    assert_eq!(service.statuses(), fleet(3));
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_each_poll_result() {
    let (service, mock) = service();
    let mut statuses = service.subscribe();
    assert!(statuses.latest().is_empty());

    mock.set_statuses(fleet(1));
    service.start_simulation(POLL).await.expect("start command should settle");
    assert_eq!(statuses.next().await, Some(fleet(1)));

    mock.set_statuses(fleet(6));
    assert_eq!(statuses.next().await, Some(fleet(6)));
}

#[tokio::test(start_paused = true)]
async fn test_second_start_does_not_create_second_loop() {
    let (service, mock) = service();

    service.start_simulation(POLL).await.expect("start command should settle");
    service.start_simulation(POLL).await.expect("start command should settle");
    service
        .start_simulation(Duration::from_millis(100))
        .await
        .expect("start command should settle");

    time::sleep(Duration::from_millis(3500)).await;

    let calls = mock.calls();
    assert_eq!(calls.start, 1, "backend start is only sent once");
    assert_eq!(calls.status, 3, "a single loop at the first interval");
}

#[tokio::test(start_paused = true)]
async fn test_stop_resets_statuses_and_ends_polling() {
    let (service, mock) = service();
    mock.set_statuses(fleet(4));

    service.start_simulation(POLL).await.expect("start command should settle");
    time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(service.statuses(), fleet(4));

    service.stop_simulation().await.expect("stop command should settle");
    assert!(!service.is_polling());
    assert!(service.statuses().is_empty());
    assert_eq!(mock.calls().stop, 1);

    let polls_at_stop = mock.calls().status;
    time::sleep(Duration::from_secs(10)).await;
    assert_eq!(mock.calls().status, polls_at_stop);
    assert!(service.statuses().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_poll_settling_after_stop_is_discarded() {
    let (service, mock) = service();
    mock.set_statuses(fleet(4));
    mock.delay_status(Duration::from_millis(2000));

    service.start_simulation(POLL).await.expect("start command should settle");

    // The first fetch leaves at 1s and answers at 3s.
    time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(mock.calls().status, 1);

    service.stop_simulation().await.expect("stop command should settle");
    assert!(service.statuses().is_empty());

    time::sleep(Duration::from_secs(5)).await;
    assert!(!service.is_polling());
    assert!(
        service.statuses().is_empty(),
        "a stale poll must not repopulate the list"
    );
}

#[tokio::test(start_paused = true)]
async fn test_slow_commands_do_not_delay_polling_control() {
    let (service, mock) = service();
    mock.set_statuses(fleet(2));
    mock.delay_commands(Duration::from_secs(5));
    let started_at = Instant::now();

    let starting = service.start_simulation(POLL);
    assert!(service.is_polling(), "poller is installed before the backend answers");

    time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(service.statuses(), fleet(2));

    let stopping = service.stop_simulation();
    assert!(!service.is_polling(), "polling ends before the backend answers");
    assert_eq!(service.statuses(), fleet(2));

    starting.await.expect("start command should settle");
    stopping.await.expect("stop command should settle");
    assert!(started_at.elapsed() >= Duration::from_millis(6500));
    assert!(service.statuses().is_empty());

    let calls = mock.calls();
    assert_eq!((calls.start, calls.stop, calls.status), (1, 1, 1));
}

#[tokio::test(start_paused = true)]
async fn test_failed_stop_keeps_statuses() {
    let (service, mock) = service();
    mock.set_statuses(fleet(2));
    mock.fail_stop(Some(ApiError::backend(503, "unavailable")));

    service.start_simulation(POLL).await.expect("start command should settle");
    time::sleep(Duration::from_millis(1500)).await;

    service.stop_simulation().await.expect("stop command should settle");

    // Polling is cancelled either way; only the reset depends on the backend.
    assert!(!service.is_polling());
    assert_eq!(service.statuses(), fleet(2));
}

#[tokio::test(start_paused = true)]
async fn test_failed_start_still_polls() {
    let (service, mock) = service();
    mock.fail_start(Some(ApiError::Network("connection refused".into())));
    mock.set_statuses(fleet(5));

    service.start_simulation(POLL).await.expect("start command should settle");
    time::sleep(Duration::from_millis(1500)).await;

    assert!(service.is_polling());
    assert_eq!(service.statuses(), fleet(5));
}

#[tokio::test(start_paused = true)]
async fn test_poll_errors_do_not_stop_loop() {
    let (service, mock) = service();
    mock.set_statuses(fleet(1));

    service.start_simulation(POLL).await.expect("start command should settle");
    time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(service.statuses(), fleet(1));

    mock.fail_status(Some(ApiError::Decode("unexpected token".into())));
    mock.set_statuses(fleet(8));
    time::sleep(Duration::from_millis(2000)).await;

    // Failed polls leave the last good list in place.
    assert_eq!(mock.calls().status, 3);
    assert_eq!(service.statuses(), fleet(1));

    mock.fail_status(None);
    time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(service.statuses(), fleet(8));
}

#[tokio::test(start_paused = true)]
async fn test_restart_after_stop() {
    let (service, mock) = service();

    service.start_simulation(POLL).await.expect("start command should settle");
    service.stop_simulation().await.expect("stop command should settle");
    service.start_simulation(POLL).await.expect("start command should settle");

    time::sleep(Duration::from_millis(2500)).await;

    let calls = mock.calls();
    assert_eq!(calls.start, 2);
    assert_eq!(calls.status, 2);
    assert!(service.is_polling());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_without_backend_call() {
    let (service, mock) = service();

    service.start_simulation(POLL).await.expect("start command should settle");
    service.shutdown();
    time::sleep(Duration::from_secs(5)).await;

    let calls = mock.calls();
    assert_eq!(calls.stop, 0);
    assert_eq!(calls.status, 0);
    assert!(!service.is_polling());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_last_handle_stops_polling() {
    let (service, mock) = service();

    service.start_simulation(POLL).await.expect("start command should settle");
    drop(service);
    time::sleep(Duration::from_secs(5)).await;

    assert_eq!(mock.calls().status, 0);
}

#[tokio::test]
async fn test_request_ride_derives_direction() {
    let (service, mock) = service();

    let response = service
        .request_ride(2, 5)
        .await
        .expect("ride should be accepted");
    assert_eq!(response, RideResponse::new("Ride accepted"));

    service
        .request_ride(9, 1)
        .await
        .expect("ride should be accepted");

    let rides = mock.calls().rides;
    assert_eq!(rides[0], RideRequest::new(2, 5));
    assert_eq!(rides[0].desired_direction, Direction::Up);
    assert_eq!(rides[1].desired_direction, Direction::Down);
}

#[tokio::test]
async fn test_request_ride_surfaces_backend_failure() {
    let (service, mock) = service();
    mock.respond_to_rides(Err(ApiError::backend(500, "Service error")));

    let err = service
        .request_ride(1, 2)
        .await
        .expect_err("backend failure should propagate");
    assert_eq!(err.detail(), "Service error");
}
