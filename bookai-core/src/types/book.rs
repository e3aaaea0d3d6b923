//! The Book record committed to the catalog

use super::{ChapterCount, Genre, ValidDraft};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// A created book
///
/// Books are immutable once built. The cover is not stored: it is always
/// derived from the genre, so it can never disagree with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: Uuid,
    title: String,
    genre: Genre,
    description: String,
    chapters: ChapterCount,
    created_at: NaiveDate,
}

impl Book {
    /// Build a book from a validated draft
    pub fn new(id: Uuid, draft: &ValidDraft, created_at: NaiveDate) -> Self {
        Self {
            id,
            title: draft.title().to_string(),
            genre: draft.genre(),
            description: draft.description().to_string(),
            chapters: draft.chapters(),
            created_at,
        }
    }

    /// Build a book with a fresh time-ordered identifier
    pub fn create(draft: &ValidDraft, created_at: NaiveDate) -> Self {
        Self::new(Uuid::now_v7(), draft, created_at)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn chapters(&self) -> ChapterCount {
        self.chapters
    }

    /// Cover image reference for this book's genre
    pub fn cover(&self) -> &'static str {
        self.genre.cover()
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }
}
