use async_trait::async_trait;
use tracing::debug;

use crate::feed::{FeedClient, FeedError, Trip, model, routes};
use crate::fetch::{HttpClient, fetch_bytes};
use crate::parser::parse_feed;

/// [`FeedClient`] for the MTA subway GTFS-RT endpoints.
///
/// One call resolves the line's feed-group URL, performs an authenticated
/// GET through the wrapped [`HttpClient`], decodes the protobuf payload and
/// keeps only the trips on the requested line.
pub struct NyctClient<C> {
    http: C,
}

impl<C> NyctClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }
}

#[async_trait]
impl<C: HttpClient> FeedClient for NyctClient<C> {
    async fn fetch_line_state(&self, line: &str) -> Result<Vec<Trip>, FeedError> {
        let url = routes::feed_url_for_line(line)
            .ok_or_else(|| FeedError::UnknownLine(line.to_string()))?;
        let url = reqwest::Url::parse(&url)
            .map_err(|e| FeedError::Unavailable(format!("bad feed url {url}: {e}")))?;

        let (status, bytes) = fetch_bytes(&self.http, url)
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(FeedError::Auth(status.as_u16()));
        }
        if !status.is_success() {
            return Err(FeedError::Unavailable(format!("upstream HTTP {status}")));
        }

        debug!(line, bytes = bytes.len(), "feed bytes received, decoding");
        let feed = parse_feed(&bytes)?;
        let trips = model::trips_from_feed(feed, line);
        debug!(line, trips = trips.len(), "line state decoded");
        Ok(trips)
    }
}
