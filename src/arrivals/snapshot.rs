//! Snapshot types returned by an aggregation pass.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::arrivals::direction::Direction;

/// Predicted times at one stop for one line, split by direction.
///
/// Both buckets are always present in the serialized form, empty when no
/// update matched. Times are RFC 3339 strings in feed encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectionBoard {
    pub uptown: Vec<String>,
    pub downtown: Vec<String>,
}

impl DirectionBoard {
    pub fn push(&mut self, direction: Direction, time: String) {
        match direction {
            Direction::Uptown => self.uptown.push(time),
            Direction::Downtown => self.downtown.push(time),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.uptown.is_empty() && self.downtown.is_empty()
    }
}

/// Point-in-time result of one aggregation pass:
/// stop id -> line -> [`DirectionBoard`].
///
/// Built fresh on every pass and serialized as the nested JSON object
/// `{ stop: { line: { "uptown": [...], "downtown": [...] } } }`. Backed by
/// `BTreeMap` so the same input always serializes to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArrivalSnapshot {
    stops: BTreeMap<String, BTreeMap<String, DirectionBoard>>,
}

impl ArrivalSnapshot {
    /// Returns the board for a `(stop, line)` pair, inserting empty buckets
    /// on first access. Requested pairs are therefore always present in the
    /// output, matched updates or not.
    pub fn board_mut(&mut self, stop_id: &str, line: &str) -> &mut DirectionBoard {
        self.stops
            .entry(stop_id.to_string())
            .or_default()
            .entry(line.to_string())
            .or_default()
    }

    pub fn board(&self, stop_id: &str, line: &str) -> Option<&DirectionBoard> {
        self.stops.get(stop_id)?.get(line)
    }

    pub fn contains(&self, stop_id: &str, line: &str) -> bool {
        self.board(stop_id, line).is_some()
    }

    /// Number of `(stop, line)` entries in the snapshot.
    pub fn len(&self) -> usize {
        self.stops.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_serializes_both_keys() {
        let board = DirectionBoard::default();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"uptown":[],"downtown":[]}"#);
    }

    #[test]
    fn test_snapshot_shape() {
        let mut snapshot = ArrivalSnapshot::default();
        snapshot
            .board_mut("123N", "A")
            .push(Direction::Uptown, "2024-07-01T08:00:00-04:00".to_string());
        snapshot.board_mut("123S", "A");

        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            json,
            r#"{"123N":{"A":{"uptown":["2024-07-01T08:00:00-04:00"],"downtown":[]}},"123S":{"A":{"uptown":[],"downtown":[]}}}"#
        );
    }

    #[test]
    fn test_board_mut_is_idempotent() {
        let mut snapshot = ArrivalSnapshot::default();
        snapshot
            .board_mut("A44", "A")
            .push(Direction::Downtown, "t1".to_string());
        // Second access must return the same entry, not reset it
        assert_eq!(snapshot.board_mut("A44", "A").downtown, vec!["t1"]);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_push_routes_to_the_right_bucket() {
        let mut board = DirectionBoard::default();
        board.push(Direction::Uptown, "t1".to_string());
        board.push(Direction::Downtown, "t2".to_string());
        board.push(Direction::Uptown, "t3".to_string());
        assert_eq!(board.uptown, vec!["t1", "t3"]);
        assert_eq!(board.downtown, vec!["t2"]);
    }
}
