//! Sequences Sample Application Entry Point
//!
//! Reads `SEQUENCE_NAME`, `SEQUENCE_LIMIT` and `SEQUENCE_START` from the
//! environment (or a `.env` file), then prints the requested prefix of the
//! sequence, one value per line.
//!
//! ```bash
//! SEQUENCE_NAME=collatz SEQUENCE_START=27 SEQUENCE_LIMIT=200 cargo run -p sequences
//! ```

use std::process::ExitCode;

use sequences::{AppConfig, SampleError, pipelines};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sequences=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SampleError> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Configuration loaded: sequence={}, limit={}, start={}",
        config.name,
        config.limit,
        config.start
    );

    let values = pipelines::render(&config)?;
    for value in &values {
        println!("{value}");
    }

    tracing::info!("Printed {} values of {}", values.len(), config.name);
    Ok(())
}
