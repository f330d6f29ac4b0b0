//! Forge API - AWS Lambda Runtime

use lambda_http::{run, Error};
use tower_http::trace::TraceLayer;
use tracing::info;

use forge_app::create_app;
use forge_common::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config =
        Config::from_env().map_err(|e| Error::from(format!("Configuration error: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(&config.rust_log)?)
        .json()
        .without_time()
        .init();

    info!("Initializing Forge API Lambda");

    let app = create_app(&config).layer(TraceLayer::new_for_http());

    info!("Forge API Lambda ready to serve requests");

    run(app).await
}
