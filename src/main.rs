use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cinematch_api::api::{create_router, AppState};
use cinematch_api::config::Config;
use cinematch_api::services::providers::{
    HuggingFaceClassifier, SentimentClassifier, TmdbCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    if config.tmdb_api_key.is_none() {
        tracing::warn!("TMDB_API_KEY is not set; catalog requests will fail until configured");
    }

    let catalog = Arc::new(TmdbCatalog::new(
        config.tmdb_api_key.clone(),
        config.tmdb_base_url.clone(),
    ));

    // Initialized once; a failure here is recorded and surfaced per request,
    // never retried.
    let classifier: Option<Arc<dyn SentimentClassifier>> =
        match HuggingFaceClassifier::new(config.hf_api_token.clone(), config.hf_api_url.clone()) {
            Ok(classifier) => Some(Arc::new(classifier)),
            Err(e) => {
                tracing::warn!(error = %e, "Sentiment classifier unavailable");
                None
            }
        };

    let state = AppState::new(catalog, classifier, config.review_limits());
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
