//! Arrival aggregation.
//!
//! This module turns per-line trip state into the queryable snapshot:
//! stop id -> line -> direction -> predicted times. Direction comes from the
//! marker embedded in MTA stop identifiers, matching is substring
//! containment, and bucket order is feed encounter order.

pub mod aggregate;
pub mod direction;
pub mod snapshot;

pub use aggregate::{StopRequest, aggregate};
pub use direction::Direction;
pub use snapshot::{ArrivalSnapshot, DirectionBoard};
