use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use missions::config::AppConfig;
use missions::handlers;
use missions::models::CleaningInput;
use missions::services::generator::MissionGenerator;
use missions::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::from_env();
    config.prices.validate()?;

    if let Some(path) = std::env::args().nth(1) {
        config.input_path = Some(path);
    }

    match config.input_path.clone() {
        Some(path) => run_once(&config, &path).await,
        None => serve(config).await,
    }
}

async fn run_once(config: &AppConfig, path: &str) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read input file {path}"))?;
    let input = CleaningInput::from_json(&raw).context("failed to parse input document")?;

    let generation = MissionGenerator::new(config.prices).generate(&input);
    for rejection in &generation.rejections {
        tracing::warn!(
            entity_type = rejection.entity_type.as_str(),
            id = ?rejection.id,
            listing_id = ?rejection.listing_id,
            "{}",
            rejection.description
        );
    }

    println!("{}", serde_json::to_string_pretty(&generation.output)?);
    Ok(())
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(&config));

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/missions", post(handlers::missions::generate_missions))
        .route(
            "/api/missions/rejections",
            get(handlers::missions::last_rejections),
        )
        .route("/api/prices", get(handlers::missions::get_prices))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
