//! Ride request validation.
//!
//! Rules are checked in a fixed order and the first failing rule wins:
//! 1. both floors present and numeric
//! 2. both floors inside the served [`FloorRange`]
//! 3. pickup and destination differ
//! 4. both floors are whole numbers (typed input only)
//!
//! Only a request passing every rule is ever sent to the backend.
use std::fmt;

use thiserror::Error;

use crate::{ride::RideRequest, status::Floor};

/// Inclusive range of floors served by the building.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloorRange {
    min: Floor,
    max: Floor,
}

impl FloorRange {
    pub const DEFAULT: Self = Self { min: 1, max: 10 };

    /// Returns `None` when `min > max`.
    pub const fn new(min: Floor, max: Floor) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    pub const fn min(&self) -> Floor {
        self.min
    }

    pub const fn max(&self) -> Floor {
        self.max
    }

    pub const fn contains(&self, floor: Floor) -> bool {
        floor >= self.min && floor <= self.max
    }
}

impl Default for FloorRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Reasons a ride request is rejected before reaching the backend.
///
/// The `Display` text is shown to the user as-is.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RideValidationError {
    #[error("Pickup and destination floors are required and must be valid numbers.")]
    MissingFloor,

    #[error("Pickup and destination floors must be between {min} and {max}")]
    OutOfRange { min: Floor, max: Floor },

    #[error("Pickup and destination floors must be different.")]
    SameFloor,

    #[error("Pickup and destination floors must be whole numbers.")]
    FractionalFloor,
}

impl RideValidationError {
    /// Whether the form inputs should be wiped after this error.
    ///
    /// Missing values leave the inputs alone so the user can finish typing.
    pub const fn clears_inputs(&self) -> bool {
        !matches!(self, Self::MissingFloor)
    }
}

/// Validates a pair of (possibly missing) floors against `range`.
pub fn validate_ride(
    pickup: Option<Floor>,
    destination: Option<Floor>,
    range: FloorRange,
) -> Result<RideRequest, RideValidationError> {
    let (Some(pickup), Some(destination)) = (pickup, destination) else {
        return Err(RideValidationError::MissingFloor);
    };

    if !range.contains(pickup) || !range.contains(destination) {
        return Err(RideValidationError::OutOfRange {
            min: range.min(),
            max: range.max(),
        });
    }

    if pickup == destination {
        return Err(RideValidationError::SameFloor);
    }

    Ok(RideRequest::new(pickup, destination))
}

/// Validates floors as typed by the user.
///
/// Blank or non-numeric text is a missing floor. Decimal input such as `2.5`
/// is range- and equality-checked like any number and only then rejected as
/// [`RideValidationError::FractionalFloor`].
pub fn validate_ride_input(
    pickup: &str,
    destination: &str,
    range: FloorRange,
) -> Result<RideRequest, RideValidationError> {
    let (Some(pickup), Some(destination)) = (parse_number(pickup), parse_number(destination))
    else {
        return Err(RideValidationError::MissingFloor);
    };

    let in_range = |floor: f64| floor >= f64::from(range.min()) && floor <= f64::from(range.max());
    if !in_range(pickup) || !in_range(destination) {
        return Err(RideValidationError::OutOfRange {
            min: range.min(),
            max: range.max(),
        });
    }

    if pickup == destination {
        return Err(RideValidationError::SameFloor);
    }

    match (whole_floor(pickup), whole_floor(destination)) {
        (Some(pickup), Some(destination)) => Ok(RideRequest::new(pickup, destination)),
        _ => Err(RideValidationError::FractionalFloor),
    }
}

fn parse_number(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

// Only called on values already inside a `FloorRange`, so the cast is exact.
fn whole_floor(value: f64) -> Option<Floor> {
    (value.fract() == 0.0).then_some(value as Floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Direction;

    const RANGE: FloorRange = FloorRange::DEFAULT;

    #[test]
    fn missing_floor_wins_over_everything() {
        for (pickup, destination) in [(None, Some(2)), (Some(3), None), (None, None)] {
            let err = validate_ride(pickup, destination, RANGE).unwrap_err();
            assert_eq!(err, RideValidationError::MissingFloor);
            assert!(err.to_string().contains("required and must be valid numbers"));
            assert!(!err.clears_inputs());
        }

        // Missing value is reported even when the other one is out of range.
        assert_eq!(
            validate_ride(None, Some(42), RANGE),
            Err(RideValidationError::MissingFloor)
        );
    }

    #[test]
    fn out_of_range_on_either_side() {
        for (pickup, destination) in [(0, 5), (5, 11), (0, 11), (-3, -3), (11, 11)] {
            let err = validate_ride(Some(pickup), Some(destination), RANGE).unwrap_err();
            assert!(err.to_string().contains("between 1 and 10"), "{pickup}->{destination}");
            assert!(err.clears_inputs());
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(validate_ride(Some(1), Some(10), RANGE).is_ok());
        assert!(validate_ride(Some(10), Some(1), RANGE).is_ok());
    }

    #[test]
    fn same_floor_rejected() {
        let err = validate_ride(Some(3), Some(3), RANGE).unwrap_err();
        assert_eq!(err, RideValidationError::SameFloor);
        assert!(err.to_string().contains("must be different"));
        assert!(err.clears_inputs());
    }

    #[test]
    fn valid_pair_builds_request() {
        let request = validate_ride(Some(2), Some(5), RANGE).unwrap();
        assert_eq!(request.pickup_floor, 2);
        assert_eq!(request.destination_floor, 5);
        assert_eq!(request.desired_direction, Direction::Up);
    }

    #[test]
    fn custom_range_message_uses_bounds() {
        let range = FloorRange::new(-2, 20).unwrap();
        let err = validate_ride(Some(-3), Some(4), range).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Pickup and destination floors must be between -2 and 20"
        );
        assert!(FloorRange::new(5, 1).is_none());
    }

    #[test]
    fn typed_input_accepts_trimmed_integers() {
        let request = validate_ride_input(" 7 ", "-0", FloorRange::new(-1, 10).unwrap()).unwrap();
        assert_eq!((request.pickup_floor, request.destination_floor), (7, 0));
        assert_eq!(request.desired_direction, Direction::Down);
    }

    #[test]
    fn typed_input_blank_or_text_is_missing() {
        let cases = [("", "3"), ("4", "  "), ("abc", "2"), ("NaN", "2"), ("inf", "5")];
        for (pickup, destination) in cases {
            assert_eq!(
                validate_ride_input(pickup, destination, RANGE),
                Err(RideValidationError::MissingFloor),
                "{pickup:?}->{destination:?}"
            );
        }
    }

    #[test]
    fn typed_decimals_follow_numeric_rules_first() {
        assert!(matches!(
            validate_ride_input("10.5", "3", RANGE),
            Err(RideValidationError::OutOfRange { .. })
        ));
        assert_eq!(
            validate_ride_input("2.5", "2.5", RANGE),
            Err(RideValidationError::SameFloor)
        );

        let err = validate_ride_input("2.5", "7", RANGE).unwrap_err();
        assert_eq!(err, RideValidationError::FractionalFloor);
        assert_eq!(
            err.to_string(),
            "Pickup and destination floors must be whole numbers."
        );
        assert!(err.clears_inputs());

        // A decimal with no fractional part is a whole floor.
        let request = validate_ride_input("2.0", "7", RANGE).unwrap();
        assert_eq!(request.pickup_floor, 2);
    }
}
