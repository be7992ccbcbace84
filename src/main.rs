//! StudyForge API server

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studyforge::{
    config::Args,
    server::{self, AppState},
    store::Store,
    suggest::{FallbackSuggestions, GeminiConfig, GeminiSuggestions, SuggestionProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_level = args.log_level.to_ascii_lowercase();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("studyforge={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  StudyForge API");
    info!("======================================");
    info!("Listen: {}", args.listen_addr());
    info!(
        "Tree ids: {}",
        if args.strict_tree_ids { "strict" } else { "fallback to default" }
    );

    let suggestions = suggestion_provider(&args);
    info!("Suggestions: {}", suggestions.name());
    info!("======================================");

    let state = AppState::new(Store::seeded(), suggestions, &args);
    server::run(args.listen_addr(), state).await?;

    info!("StudyForge stopped");
    Ok(())
}

fn suggestion_provider(args: &Args) -> Arc<dyn SuggestionProvider> {
    let Some(key) = args.ai_api_key() else {
        warn!("API_KEY not set, serving built-in suggestions");
        return Arc::new(FallbackSuggestions);
    };

    let mut config = GeminiConfig::new(key, args.gemini_model.clone());
    config.timeout_secs = args.ai_timeout_secs;

    match GeminiSuggestions::new(config) {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            warn!("AI client unavailable ({}), serving built-in suggestions", e);
            Arc::new(FallbackSuggestions)
        }
    }
}
