//! Salarycast server - salary prediction API
//!
//! Serves a pre-trained salary regression model over HTTP. The model
//! artifact is loaded once before the listener binds; a missing or corrupt
//! artifact aborts startup.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=SalaryPredict.onnx cargo run
//! ```
//!
//! # Environment Variables
//! - `BIND_ADDRESS` - Listen address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 8000)
//! - `MODEL_PATH` - Model artifact path (default: SalaryPredict.onnx)

use anyhow::Result;
use salarycast::application::ml;
use salarycast::application::prediction::PredictionService;
use salarycast::config::Config;
use salarycast::interfaces::http::{self, AppState};
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Salarycast {} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: bind={}:{}, model={:?}",
        config.bind_address, config.port, config.model_path
    );

    // One-time blocking initialization barrier: the listener must not
    // exist until the model is loaded or the process has died.
    let model = ml::load_model(&config.model_path)?;
    let service = PredictionService::new(model);
    info!("Model loaded: {}", service.model_name());

    let state = AppState {
        service: Arc::new(service),
    };
    let app = http::router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
