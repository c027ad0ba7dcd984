use std::process::ExitCode;

use tracing::info;

use pipeline_api::adapters::http::{serve, StartupError};
use pipeline_api::config::AppConfig;
use pipeline_api::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pipeline-api: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config)?;

    info!(
        environment = ?config.server.environment,
        cors_origins = ?config.server.cors_origins_list(),
        "Configuration loaded"
    );

    serve(config).await
}
