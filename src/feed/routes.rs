//! Route code to MTA feed-group mapping.
//!
//! The MTA publishes one GTFS-RT feed per group of routes, not per route;
//! e.g. the A, C and E trains share the `-ace` feed. The suffix is appended
//! to [`FEED_BASE_URL`].

/// Base URL for the MTA subway GTFS-RT feeds.
pub const FEED_BASE_URL: &str =
    "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs";

/// Feed groups: which route codes are served by which URL suffix.
const FEED_GROUPS: &[(&[&str], &str)] = &[
    (&["1", "2", "3", "4", "5", "6", "GS"], ""),
    (&["A", "C", "E"], "-ace"),
    (&["B", "D", "F", "M"], "-bdfm"),
    (&["G"], "-g"),
    (&["J", "Z"], "-jz"),
    (&["N", "Q", "R", "W"], "-nqrw"),
    (&["L"], "-l"),
    (&["7"], "-7"),
    (&["SI", "SIR"], "-si"),
];

/// Returns the feed URL suffix for a route code, or `None` for routes with
/// no known realtime feed.
pub fn feed_suffix_for_line(line: &str) -> Option<&'static str> {
    FEED_GROUPS
        .iter()
        .find(|(routes, _)| routes.contains(&line))
        .map(|(_, suffix)| *suffix)
}

/// Returns the full feed URL for a route code.
pub fn feed_url_for_line(line: &str) -> Option<String> {
    feed_suffix_for_line(line).map(|suffix| format!("{FEED_BASE_URL}{suffix}"))
}
