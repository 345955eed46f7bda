//! Display rows derived from [`ElevatorStatus`] snapshots.
use elevator_core::{Direction, ElevatorId, ElevatorStatus, Floor};

use crate::message::MessageKind;

/// Maps view-model values to a frontend's concrete styling.
///
/// Keeps color and glyph decisions out of the shared types; each frontend
/// supplies its own implementation.
pub trait PresentationMapper {
    type Style;

    fn style_direction(&self, direction: Direction) -> Self::Style;

    fn style_message(&self, kind: MessageKind) -> Self::Style;

    fn style_polling(&self, polling: bool) -> Self::Style;
}

/// One elevator, formatted for a table row.
#[derive(Clone, Debug, PartialEq)]
pub struct ElevatorRow {
    pub id: ElevatorId,
    pub floor: Floor,
    pub direction: Direction,
    /// Pending stops joined in service order, `-` when none.
    pub stops: String,
    pub move_seconds: String,
    pub wait_seconds: String,
}

impl ElevatorRow {
    pub fn from_status(status: &ElevatorStatus) -> Self {
        Self {
            id: status.id,
            floor: status.current_floor,
            direction: status.direction,
            stops: format_stops(&status.stops),
            move_seconds: format_seconds(status.move_seconds_remaining),
            wait_seconds: format_seconds(status.wait_seconds_remaining),
        }
    }
}

/// Rows for every status, in the order the backend reported them.
pub fn elevator_rows(statuses: &[ElevatorStatus]) -> Vec<ElevatorRow> {
    statuses.iter().map(ElevatorRow::from_status).collect()
}

fn format_stops(stops: &[Floor]) -> String {
    if stops.is_empty() {
        return "-".to_string();
    }
    stops
        .iter()
        .map(Floor::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

fn format_seconds(seconds: f64) -> String {
    if seconds <= 0.0 {
        "-".to_string()
    } else {
        format!("{:.1}", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_moving_elevator() {
        let status = ElevatorStatus {
            id: 2,
            current_floor: 4,
            direction: Direction::Up,
            stops: vec![6, 9],
            move_seconds_remaining: 1.4,
            wait_seconds_remaining: 0.0,
        };

        let row = ElevatorRow::from_status(&status);
        assert_eq!(row.stops, "6 → 9");
        assert_eq!(row.move_seconds, "1.4");
        assert_eq!(row.wait_seconds, "-");
    }

    #[test]
    fn rows_keep_backend_order() {
        let rows = elevator_rows(&[ElevatorStatus::idle(3, 1), ElevatorStatus::idle(1, 5)]);
        let ids: Vec<_> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(rows[1].stops, "-");
    }
}
