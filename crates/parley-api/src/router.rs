use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::CorsConfig,
    middleware::logging,
    routes::{auth, chat, docs, health, messages, threads},
    state::AppState,
};

/// Build the application router
///
/// Every route is served both at the root and under `/api`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);
    let cors = build_cors_layer(&state.config.cors);

    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .layer(middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(timeout))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Health & docs
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        // Auth
        .route("/login", post(auth::login))
        .route("/auth/google", post(auth::login))
        // Threads; the list is keyed by user id, the rest by thread id
        .route("/threads", post(threads::create_thread))
        .route(
            "/threads/:id",
            get(threads::list_threads)
                .put(threads::rename_thread)
                .delete(threads::delete_thread),
        )
        // Messages
        .route("/threads/:id/messages", get(messages::list_messages))
        .route("/chat-history/:id", get(messages::chat_history))
        .route("/chat", post(chat::chat))
}

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        return CorsLayer::new();
    }

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if config.origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
