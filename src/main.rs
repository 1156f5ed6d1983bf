use std::{sync::Arc, time::Duration};

use moviecast::{
    api::{create_router, AppState},
    config::Config,
    services::{
        providers::{omdb::OmdbProvider, open_meteo::OpenMeteoProvider},
        RecommendationService,
    },
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moviecast=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let timeout = Duration::from_secs(config.http_timeout_secs);

    if !config.has_catalog_credentials() {
        tracing::warn!("OMDB_API_KEY is not configured; searches will be refused");
    }

    let open_meteo = Arc::new(OpenMeteoProvider::new(
        config.geocoding_url.clone(),
        config.weather_url.clone(),
        timeout,
    )?);
    let omdb = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone().unwrap_or_default(),
        config.omdb_api_url.clone(),
        timeout,
    )?);

    let recommender = RecommendationService::new(
        open_meteo.clone(),
        open_meteo,
        omdb,
        config.has_catalog_credentials(),
    );

    let app = create_router(AppState::new(recommender));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
