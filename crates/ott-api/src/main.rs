use ott_api::config::ApiConfig;
use ott_reports::ReportService;
use ott_source::MongoSource;
use tokio::signal::unix::{SignalKind, signal};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

async fn shutdown_signal() {
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to register SIGTERM handler");
    tokio::select! {
        _ = sigterm.recv() => {}
        _ = tokio::signal::ctrl_c() => {}
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ApiConfig::from_env();

    // A failed connection is logged by the source; requests then fail with 500.
    let source = MongoSource::connect(&config.mongo_uri, &config.database).await;
    if !source.is_available() {
        warn!("serving without a database client");
    }
    let app = ott_api::app(ReportService::new(source));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| {
            error!(addr = %bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        });

    info!(addr = %bind_addr, "listening");
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
    info!("shutdown complete");
}
