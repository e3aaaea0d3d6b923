//! Request handlers

mod draft;
mod library;
mod sync;

pub use draft::*;
pub use library::*;
pub use sync::*;

use axum::Json;
use bookai_core::{Genre, GenreInfo};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// List the supported genres
pub async fn list_genres() -> Json<Vec<&'static GenreInfo>> {
    Json(Genre::catalog().collect())
}
