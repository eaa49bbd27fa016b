//! Realtime feed access.
//!
//! [`FeedClient`] is the contract the aggregator consumes: one call per line,
//! returning the trips currently active on that line. [`NyctClient`]
//! implements it against the MTA GTFS-RT endpoints; tests substitute their
//! own implementations.

pub mod model;
mod nyct;
pub mod routes;

pub use model::{StopTimeUpdate, Trip};
pub use nyct::NyctClient;

use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a single line fetch.
///
/// Every variant is scoped to one line; the aggregator degrades that line
/// to an empty trip set rather than aborting the snapshot.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("no realtime feed is known for line {0:?}")]
    UnknownLine(String),
    #[error("feed unavailable: {0}")]
    Unavailable(String),
    #[error("upstream rejected credentials (HTTP {0})")]
    Auth(u16),
    #[error("malformed feed payload: {0}")]
    Decode(#[from] prost::DecodeError),
}

/// Source of realtime trip state, one fetch per line.
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Returns the trips currently active on `line`, in feed order.
    ///
    /// Each returned [`Trip`] carries its stop-time updates in the order the
    /// feed listed them; no ordering is guaranteed across trips.
    async fn fetch_line_state(&self, line: &str) -> Result<Vec<Trip>, FeedError>;
}
