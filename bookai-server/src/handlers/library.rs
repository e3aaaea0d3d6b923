//! Catalog and creation handlers

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bookai_core::{BookCard, CatalogView, CreateOutcome, Notification};
use uuid::Uuid;

/// List the catalog, newest first
pub async fn list_books(State(state): State<AppState>) -> Json<CatalogView> {
    Json(state.session.view().await)
}

/// Get a single book card
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookCard>, ApiError> {
    let book = state.session.book(id).await?;
    Ok(Json(BookCard::from(&book)))
}

/// Create a book from the current draft
pub async fn create_book(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<BookCard>), ApiError> {
    match state.session.create_book().await? {
        CreateOutcome::Created(book) => Ok((StatusCode::CREATED, Json(BookCard::from(&book)))),
        CreateOutcome::AlreadyCreating => Err(ApiError::Busy),
    }
}

/// "Read" action on a book
pub async fn read_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, ApiError> {
    Ok(Json(state.session.read(id).await?))
}

/// "Export" action on a book
pub async fn export_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, ApiError> {
    Ok(Json(state.session.export(id).await?))
}
