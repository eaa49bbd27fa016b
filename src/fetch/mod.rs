mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use reqwest::StatusCode;

/// Issues a GET for `url` and returns the response status alongside the raw
/// body. The status is surfaced rather than checked here so callers can
/// classify auth rejections separately from other upstream failures.
pub async fn fetch_bytes<C: HttpClient>(
    client: &C,
    url: reqwest::Url,
) -> reqwest::Result<(StatusCode, Vec<u8>)> {
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await?;
    let status = resp.status();
    let body = resp.bytes().await?;
    Ok((status, body.to_vec()))
}
