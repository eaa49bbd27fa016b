//! HTTP surface for the aggregated snapshot.

use actix_web::{App, HttpResponse, HttpServer, web};
use std::sync::Arc;
use tracing::{error, info};

use crate::arrivals;
use crate::config::WatchList;
use crate::feed::FeedClient;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn FeedClient>,
    pub watch: Arc<WatchList>,
}

/// One aggregation pass over the watched pairs, as JSON.
///
/// Replies 200 with the snapshot even under partial per-line failure; those
/// lines surface as empty buckets and a warning in the logs. Only a pass
/// where every line failed becomes a 502.
async fn subway(state: web::Data<AppState>) -> HttpResponse {
    match arrivals::aggregate(state.client.as_ref(), &state.watch.stops).await {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => {
            error!(error = %e, "aggregation pass failed");
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": "realtime feeds unavailable"
            }))
        }
    }
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "watched_stops": state.watch.stops.len(),
    }))
}

pub async fn run(state: AppState, bind: &str) -> std::io::Result<()> {
    info!(bind, stops = state.watch.stops.len(), "starting HTTP server");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .route("/subway", web::get().to(subway))
            .route("/health", web::get().to(health))
    })
    .bind(bind)?
    .run()
    .await
}
