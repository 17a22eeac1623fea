use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use parley_api::{build_router, config::Config, state::AppState};
use parley_llm::ResponderFactory;
use parley_persist::{SessionStore, SessionStoreBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting Parley API server");
    tracing::info!("Config loaded: {}", config.bind_address());

    let store: Arc<dyn SessionStore> = Arc::new(
        SessionStoreBuilder::new()
            .lazy_threads(config.session.lazy_threads)
            .build(),
    );
    tracing::info!(
        lazy_threads = config.session.lazy_threads,
        "Session store ready"
    );

    let responder = ResponderFactory::create(config.responder.kind);
    tracing::info!(responder = %config.responder.kind, "Responder selected");

    let addr = config.bind_address();
    let state = Arc::new(AppState::new(config, store, responder));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("API docs: http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
