//! CLI entry point for the next-train service.
//!
//! Provides subcommands for serving the arrival snapshot over HTTP and for
//! printing a one-off snapshot to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use next_train::arrivals;
use next_train::config::WatchList;
use next_train::feed::NyctClient;
use next_train::fetch::{BasicClient, auth::ApiKey};
use next_train::server::{self, AppState};
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "next_train")]
#[command(about = "Next-train arrival board for the NYC subway", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the arrival snapshot over HTTP
    Serve {
        /// Path to the watch-list JSON file
        #[arg(short, long, default_value = "stops.json")]
        config: String,

        /// Address to bind the server to
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        bind: String,
    },
    /// Run one aggregation pass and print the snapshot as JSON
    Show {
        /// Path to the watch-list JSON file
        #[arg(short, long, default_value = "stops.json")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/next_train.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("next_train.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, bind } => {
            let watch = WatchList::load(&config)?;
            info!(
                stops = watch.stops.len(),
                lines = watch.lines().len(),
                "watch list loaded"
            );

            let state = AppState {
                client: Arc::new(build_client()?),
                watch: Arc::new(watch),
            };
            server::run(state, &bind).await?;
        }
        Commands::Show { config } => {
            let watch = WatchList::load(&config)?;
            let client = build_client()?;

            let snapshot = arrivals::aggregate(&client, &watch.stops).await?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}

/// Builds the authenticated MTA feed client from the environment.
fn build_client() -> Result<NyctClient<ApiKey<BasicClient>>> {
    let api_key = std::env::var("MTA_API_KEY").context("MTA_API_KEY must be set")?;
    let http = BasicClient::with_timeout(Duration::from_secs(30))?;
    Ok(NyctClient::new(ApiKey::x_api_key(http, api_key)))
}
