use async_trait::async_trait;
use gtfs_rt::trip_update::{StopTimeEvent, StopTimeUpdate};
use gtfs_rt::{FeedEntity, FeedHeader, FeedMessage, TripDescriptor, TripUpdate};
use prost::Message;

use next_train::arrivals::{StopRequest, aggregate};
use next_train::feed::{FeedClient, FeedError, Trip, model};
use next_train::parser::parse_feed;

// 2024-07-01T12:00:00Z = 08:00 America/New_York (EDT)
const BASE_EPOCH: u64 = 1_719_835_200;

fn trip_entity(id: &str, route: &str, stops: &[(&str, u64)]) -> FeedEntity {
    FeedEntity {
        id: id.to_string(),
        trip_update: Some(TripUpdate {
            trip: TripDescriptor {
                trip_id: Some(format!("trip-{id}")),
                route_id: Some(route.to_string()),
                ..Default::default()
            },
            stop_time_update: stops
                .iter()
                .map(|(stop_id, time)| StopTimeUpdate {
                    stop_id: Some(stop_id.to_string()),
                    departure: Some(StopTimeEvent {
                        time: Some(*time as _),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// The A/C/E group feed as it would arrive over the wire.
fn encoded_group_feed() -> Vec<u8> {
    FeedMessage {
        header: FeedHeader {
            gtfs_realtime_version: "2.0".to_string(),
            incrementality: None,
            timestamp: Some(BASE_EPOCH),
        },
        entity: vec![
            trip_entity("1", "A", &[("A44N", BASE_EPOCH), ("A44S", BASE_EPOCH + 300)]),
            trip_entity("2", "C", &[("A44N", BASE_EPOCH + 600)]),
            trip_entity("3", "E", &[("A44N", BASE_EPOCH + 900)]),
        ],
    }
    .encode_to_vec()
}

/// Feed source that runs the real decode and extraction over canned bytes.
struct WireFeed {
    bytes: Vec<u8>,
}

#[async_trait]
impl FeedClient for WireFeed {
    async fn fetch_line_state(&self, line: &str) -> Result<Vec<Trip>, FeedError> {
        let feed = parse_feed(&self.bytes)?;
        Ok(model::trips_from_feed(feed, line))
    }
}

fn req(line: &str, stop_id: &str) -> StopRequest {
    StopRequest {
        line: line.to_string(),
        stop_id: stop_id.to_string(),
    }
}

#[tokio::test]
async fn test_full_pipeline() {
    let source = WireFeed {
        bytes: encoded_group_feed(),
    };
    let requests = [req("A", "A44N"), req("A", "A44S"), req("C", "A44N")];

    let snapshot = aggregate(&source, &requests).await.expect("aggregation");

    let json = serde_json::to_string(&snapshot).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"A44N":{"#,
            r#""A":{"uptown":["2024-07-01T08:00:00-04:00"],"downtown":[]},"#,
            r#""C":{"uptown":["2024-07-01T08:10:00-04:00"],"downtown":[]}},"#,
            r#""A44S":{"A":{"uptown":[],"downtown":["2024-07-01T08:05:00-04:00"]}}}"#
        )
    );
}

#[tokio::test]
async fn test_pipeline_excludes_unrequested_routes() {
    // The E train shares the feed but nobody asked about it
    let source = WireFeed {
        bytes: encoded_group_feed(),
    };

    let snapshot = aggregate(&source, &[req("A", "A44N")]).await.unwrap();

    assert_eq!(snapshot.len(), 1);
    let board = snapshot.board("A44N", "A").unwrap();
    assert_eq!(board.uptown, vec!["2024-07-01T08:00:00-04:00"]);
}

#[tokio::test]
async fn test_pipeline_garbage_bytes_degrade_to_error() {
    let source = WireFeed {
        bytes: vec![0xFF, 0xFE, 0x00, 0x01],
    };

    // Single line, decode fails, so the whole pass fails
    let result = aggregate(&source, &[req("A", "A44N")]).await;
    assert!(result.is_err());
}
