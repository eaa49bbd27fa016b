//! Watch-list configuration.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::arrivals::StopRequest;

/// The `(line, stop)` pairs the service monitors.
///
/// Stored as a plain JSON file on disk:
/// ```json
/// {
///   "stops": [
///     { "line": "A", "stop_id": "A44" },
///     { "line": "L", "stop_id": "L10N" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct WatchList {
    pub stops: Vec<StopRequest>,
}

impl WatchList {
    /// Loads the watch list from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading watch list {path}"))?;
        Self::from_json(&content).with_context(|| format!("parsing watch list {path}"))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Distinct lines referenced by the watch list, first-seen order.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::new();
        for request in &self.stops {
            if !lines.contains(&request.line.as_str()) {
                lines.push(request.line.as_str());
            }
        }
        lines
    }
}
