use std::time::Duration;

use client_backend_http::{HttpConfig, HttpElevatorApi};
use runtime::{ApiError, ElevatorApi, ElevatorService};

fn unreachable_api() -> HttpElevatorApi {
    let config = HttpConfig {
        base_url: "http://127.0.0.1:1/api/Elevator/".to_string(),
        request_timeout: Duration::from_secs(2),
    };
    HttpElevatorApi::new(config).expect("client should build")
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let api = unreachable_api();
    assert_eq!(api.endpoint(), "http://127.0.0.1:1/api/Elevator/");

    let result = api.fetch_status().await;
    assert!(matches!(result, Err(ApiError::Network(_))), "got {:?}", result);

    let result = api.start().await;
    assert!(matches!(result, Err(ApiError::Network(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_ride_failure_surfaces_through_service() {
    let service = ElevatorService::new(unreachable_api());

    let err = service
        .request_ride(2, 5)
        .await
        .expect_err("backend is unreachable");
    assert!(matches!(err, ApiError::Network(_)));
    assert!(!err.detail().is_empty());
}
