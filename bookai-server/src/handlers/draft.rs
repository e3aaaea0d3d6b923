//! Draft editing handlers

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Json};
use bookai_core::{ChapterCount, Draft, Genre};
use serde::Deserialize;

/// Partial update of the draft; absent fields are left alone
#[derive(Debug, Default, Deserialize)]
pub struct DraftUpdate {
    pub title: Option<String>,

    /// Genre key; an empty string clears the selection
    pub genre: Option<String>,

    pub description: Option<String>,

    pub chapters: Option<u32>,
}

/// Get the current draft
pub async fn get_draft(State(state): State<AppState>) -> Json<Draft> {
    Json(state.session.draft().await)
}

/// Update draft fields
pub async fn update_draft(
    State(state): State<AppState>,
    Json(update): Json<DraftUpdate>,
) -> Result<Json<Draft>, ApiError> {
    // Parse everything before touching the draft so a bad field changes nothing
    let genre = match update.genre.as_deref().map(str::trim) {
        None => None,
        Some("") => Some(None),
        Some(key) => Some(Some(key.parse::<Genre>()?)),
    };
    let chapters = update.chapters.map(ChapterCount::try_from).transpose()?;

    let draft = state
        .session
        .edit_draft(|draft| {
            if let Some(title) = update.title {
                draft.title = title;
            }
            if let Some(genre) = genre {
                draft.genre = genre;
            }
            if let Some(description) = update.description {
                draft.description = description;
            }
            if let Some(chapters) = chapters {
                draft.chapters = chapters;
            }
        })
        .await;

    Ok(Json(draft))
}

/// Reset the draft to its defaults
pub async fn reset_draft(State(state): State<AppState>) -> Json<Draft> {
    Json(state.session.reset_draft().await)
}
