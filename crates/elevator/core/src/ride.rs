//! Ride requests sent to the backend and the replies it sends back.
use crate::status::{Direction, Floor};

/// A single demand to travel from a pickup floor to a destination floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RideRequest {
    pub pickup_floor: Floor,
    pub destination_floor: Floor,
    pub desired_direction: Direction,
}

impl RideRequest {
    /// Builds a request, deriving the desired direction from the two floors.
    pub const fn new(pickup_floor: Floor, destination_floor: Floor) -> Self {
        Self {
            pickup_floor,
            destination_floor,
            desired_direction: Direction::between(pickup_floor, destination_floor),
        }
    }
}

/// Backend reply to a ride request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideResponse {
    pub message: String,
}

impl RideResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// True when the backend could not assign an elevator.
    pub fn is_busy(&self) -> bool {
        self.message.to_lowercase().contains("busy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_direction() {
        assert_eq!(RideRequest::new(2, 5).desired_direction, Direction::Up);
        assert_eq!(RideRequest::new(9, 3).desired_direction, Direction::Down);
    }

    #[test]
    fn busy_detection_ignores_case() {
        assert!(RideResponse::new("Elevator busy").is_busy());
        assert!(RideResponse::new("All cars BUSY, try later").is_busy());
        assert!(!RideResponse::new("Ride accepted").is_busy());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn encodes_request_with_wire_names() {
        let value = serde_json::to_value(RideRequest::new(2, 5)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "pickupFloor": 2,
                "destinationFloor": 5,
                "desiredDirection": 1
            })
        );

        let value = serde_json::to_value(RideRequest::new(5, 2)).unwrap();
        assert_eq!(value["desiredDirection"], -1);
    }
}
