//! Elevator status snapshots as reported by the backend.
use std::fmt;

use thiserror::Error;

/// Floor number as used on the wire.
pub type Floor = i32;

/// Backend-assigned elevator identifier.
pub type ElevatorId = u32;

/// Travel direction of an elevator car or a ride request.
///
/// Encoded on the wire as `-1`, `0` and `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i8", into = "i8"))]
pub enum Direction {
    Down,
    #[default]
    Idle,
    Up,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("invalid direction code {0}, expected -1, 0 or 1")]
pub struct InvalidDirection(pub i8);

impl Direction {
    /// Direction a rider must travel to get from `from` to `to`.
    ///
    /// Equal floors resolve to [`Direction::Down`]; callers reject that case
    /// before a request is built.
    pub const fn between(from: Floor, to: Floor) -> Self {
        if to > from { Self::Up } else { Self::Down }
    }

    pub const fn code(self) -> i8 {
        match self {
            Self::Down => -1,
            Self::Idle => 0,
            Self::Up => 1,
        }
    }

    /// Single-character arrow used by compact renderers.
    pub const fn arrow(self) -> char {
        match self {
            Self::Down => '↓',
            Self::Idle => '•',
            Self::Up => '↑',
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = InvalidDirection;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::Down),
            0 => Ok(Self::Idle),
            1 => Ok(Self::Up),
            other => Err(InvalidDirection(other)),
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction.code()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Down => "down",
            Self::Idle => "idle",
            Self::Up => "up",
        };
        f.write_str(label)
    }
}

/// Snapshot of one elevator car.
///
/// Produced by the backend on every status poll and replaced wholesale by the
/// next poll; the client never mutates it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ElevatorStatus {
    pub id: ElevatorId,
    pub current_floor: Floor,
    pub direction: Direction,
    /// Pending stops in service order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stops: Vec<Floor>,
    pub move_seconds_remaining: f64,
    pub wait_seconds_remaining: f64,
}

impl ElevatorStatus {
    /// An idle car parked at `floor` with nothing queued.
    pub fn idle(id: ElevatorId, floor: Floor) -> Self {
        Self {
            id,
            current_floor: floor,
            direction: Direction::Idle,
            stops: Vec::new(),
            move_seconds_remaining: 0.0,
            wait_seconds_remaining: 0.0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle && self.stops.is_empty()
    }
}
