//! Direction classification and stop matching.

/// Direction of travel, derived from the marker embedded in a stop
/// identifier. Never stored upstream; always re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Uptown,
    Downtown,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Uptown => "uptown",
            Direction::Downtown => "downtown",
        }
    }
}

/// Classifies a stop identifier by its embedded direction marker.
///
/// MTA platform identifiers end in `N` (uptown) or `S` (downtown), e.g.
/// `"A44N"`. The check is marker *presence*, `N` taking precedence, so the
/// convention stays in one place if the identifier scheme ever changes.
/// Identifiers carrying neither marker are unclassified and the caller
/// drops them.
pub fn classify(stop_id: &str) -> Option<Direction> {
    if stop_id.contains('N') {
        Some(Direction::Uptown)
    } else if stop_id.contains('S') {
        Some(Direction::Downtown)
    } else {
        None
    }
}

/// Whether a feed update at `update_stop_id` is relevant to the requested
/// stop.
///
/// Deliberately case-sensitive substring containment, not equality: one
/// logical stop is published as several platform identifiers sharing a
/// common root (`"A44"` matches both `"A44N"` and `"A44S"`).
pub fn stop_matches(requested: &str, update_stop_id: &str) -> bool {
    update_stop_id.contains(requested)
}
