use anyhow::Result;
use futures::future;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::arrivals::direction::{classify, stop_matches};
use crate::arrivals::snapshot::ArrivalSnapshot;
use crate::feed::{FeedClient, Trip};

/// One watched `(line, stop)` pair, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRequest {
    pub line: String,
    pub stop_id: String,
}

/// Runs one aggregation pass over the watched pairs.
///
/// Fetches each distinct line exactly once (first-seen order, concurrently),
/// then fills one [`DirectionBoard`](crate::arrivals::DirectionBoard) per
/// requested pair: updates whose stop identifier contains the requested stop
/// id land in the bucket of their direction marker, unclassified ones are
/// dropped, and bucket order is feed encounter order.
///
/// A failed line is logged and served as empty buckets. The pass itself only
/// fails when every distinct line in the batch failed, i.e. the feed source
/// is unreachable altogether.
pub async fn aggregate<S>(source: &S, requests: &[StopRequest]) -> Result<ArrivalSnapshot>
where
    S: FeedClient + ?Sized,
{
    let mut lines: Vec<&str> = Vec::new();
    let mut seen = HashSet::new();
    for request in requests {
        if seen.insert(request.line.as_str()) {
            lines.push(request.line.as_str());
        }
    }

    let fetches = lines
        .iter()
        .map(|&line| async move { (line, source.fetch_line_state(line).await) });
    let results = future::join_all(fetches).await;

    let mut by_line: HashMap<&str, Vec<Trip>> = HashMap::new();
    let mut failures = 0usize;
    let mut last_error = None;
    for (line, result) in results {
        match result {
            Ok(trips) => {
                debug!(line, trips = trips.len(), "line state fetched");
                by_line.insert(line, trips);
            }
            Err(e) => {
                warn!(line, error = %e, "line fetch failed, serving empty buckets");
                failures += 1;
                last_error = Some(e);
            }
        }
    }

    if let Some(e) = last_error {
        if failures == lines.len() {
            return Err(anyhow::Error::new(e).context("every line fetch failed"));
        }
    }

    let mut snapshot = ArrivalSnapshot::default();
    let mut filled = HashSet::new();
    for request in requests {
        // A repeated pair would double-append; fill each pair once.
        if !filled.insert((request.line.as_str(), request.stop_id.as_str())) {
            continue;
        }

        let board = snapshot.board_mut(&request.stop_id, &request.line);
        let trips = by_line
            .get(request.line.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();

        for trip in trips {
            for update in &trip.stop_time_updates {
                if !stop_matches(&request.stop_id, &update.stop_id) {
                    continue;
                }
                if let Some(direction) = classify(&update.stop_id) {
                    board.push(direction, update.departure.to_rfc3339());
                }
            }
        }
    }

    Ok(snapshot)
}
