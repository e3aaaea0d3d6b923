//! API routes

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let allow_origin = match origins {
        Some("*") => AllowOrigin::from(Any),
        Some(origins) => AllowOrigin::list(
            origins
                .split(',')
                .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        ),
        // Default: allow localhost origins for development
        None => AllowOrigin::list(DEV_ORIGINS.map(HeaderValue::from_static)),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/genres", get(handlers::list_genres))
        // Draft endpoints
        .route(
            "/draft",
            get(handlers::get_draft)
                .put(handlers::update_draft)
                .delete(handlers::reset_draft),
        )
        // Creation
        .route("/books", post(handlers::create_book))
        // Library endpoints
        .route("/library", get(handlers::list_books))
        .route("/library/:id", get(handlers::get_book))
        .route("/library/:id/read", post(handlers::read_book))
        .route("/library/:id/export", post(handlers::export_book))
        // SSE endpoint
        .route("/sync", get(handlers::sync_events));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.cors_origins.as_deref()))
        .with_state(state)
}
