//! Error types for BookAI Core

use crate::types::DraftField;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias using BookaiError
pub type Result<T> = std::result::Result<T, BookaiError>;

/// Top-level error type for all BookAI operations
#[derive(Debug, Error)]
pub enum BookaiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Book not found: {0}")]
    NotFound(Uuid),
}

/// Errors raised while checking or building a draft
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<DraftField>),

    #[error("Chapter count {0} is outside {min}..={max}", min = crate::types::ChapterCount::MIN, max = crate::types::ChapterCount::MAX)]
    ChaptersOutOfRange(u32),

    #[error("Unknown genre: {0}")]
    UnknownGenre(String),
}

impl ValidationError {
    /// Message shown to the user in the notification outbox
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingFields(_) => "Заполните все поля".to_string(),
            ValidationError::ChaptersOutOfRange(n) => format!(
                "Количество глав должно быть от {} до {}, получено {}",
                crate::types::ChapterCount::MIN,
                crate::types::ChapterCount::MAX,
                n
            ),
            ValidationError::UnknownGenre(key) => format!("Неизвестный жанр: {}", key),
        }
    }
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors reported by a generation provider
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider quota exceeded")]
    QuotaExceeded,

    #[error("Malformed content: {0}")]
    MalformedContent(String),
}

/// Errors reported by an exporter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("Exporter unavailable: {0}")]
    Unavailable(String),
}
