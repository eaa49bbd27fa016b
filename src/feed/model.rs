//! Domain records extracted from a decoded GTFS-RT message.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use chrono_tz::Tz;
use gtfs_rt::FeedMessage;

/// The feeds predict times in the agency's local timezone.
pub const FEED_TZ: Tz = chrono_tz::America::New_York;

/// One active vehicle run on a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub trip_id: String,
    pub route_id: String,
    /// Stops the trip will call at, in feed order.
    pub stop_time_updates: Vec<StopTimeUpdate>,
}

/// Predicted time for one trip at one stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopTimeUpdate {
    pub stop_id: String,
    pub departure: DateTime<FixedOffset>,
}

/// Extracts the [`Trip`]s for `line` from a decoded feed message.
///
/// Only trip-update entities whose route matches `line` exactly are kept
/// (the feed covers a whole route group). Within a trip, updates keep feed
/// order; an update is dropped when it has no stop id or no usable time.
/// Departure is preferred, falling back to arrival for terminal stops where
/// the feed omits a departure event.
pub fn trips_from_feed(feed: FeedMessage, line: &str) -> Vec<Trip> {
    feed.entity
        .into_iter()
        .filter_map(|entity| {
            let update = entity.trip_update?;
            if update.trip.route_id.as_deref() != Some(line) {
                return None;
            }

            let stop_time_updates = update
                .stop_time_update
                .into_iter()
                .filter_map(|stu| {
                    let stop_id = stu.stop_id?;
                    let event = stu.departure.or(stu.arrival)?;
                    let departure = local_time(event.time? as i64)?;
                    Some(StopTimeUpdate { stop_id, departure })
                })
                .collect();

            Some(Trip {
                trip_id: update.trip.trip_id.unwrap_or_default(),
                route_id: line.to_string(),
                stop_time_updates,
            })
        })
        .collect()
}

/// Converts a feed epoch timestamp into agency-local time with its UTC
/// offset preserved, so it renders unambiguously as RFC 3339.
fn local_time(epoch_secs: i64) -> Option<DateTime<FixedOffset>> {
    let utc = Utc.timestamp_opt(epoch_secs, 0).single()?;
    Some(utc.with_timezone(&FEED_TZ).fixed_offset())
}
