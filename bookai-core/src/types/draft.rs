//! The transient form buffer edited before a book is created

use super::Genre;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of chapters, bounded to `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ChapterCount(u8);

impl ChapterCount {
    pub const MIN: u32 = 3;
    pub const MAX: u32 = 20;
    pub const DEFAULT: ChapterCount = ChapterCount(5);

    /// Clamp any value into range, the way the slider does
    pub fn saturating(n: u32) -> Self {
        Self(n.clamp(Self::MIN, Self::MAX) as u8)
    }

    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl Default for ChapterCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for ChapterCount {
    type Error = ValidationError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(ValidationError::ChaptersOutOfRange(n))
        }
    }
}

impl From<ChapterCount> for u32 {
    fn from(c: ChapterCount) -> Self {
        c.get()
    }
}

impl fmt::Display for ChapterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Draft fields that must be filled before creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Genre,
    Description,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Genre => "genre",
            DraftField::Description => "description",
        }
    }
}

/// Book concept being edited by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub genre: Option<Genre>,
    pub description: String,
    pub chapters: ChapterCount,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_chapters(mut self, chapters: ChapterCount) -> Self {
        self.chapters = chapters;
        self
    }

    /// Fields that are still empty, in form order
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(DraftField::Title);
        }
        if self.genre.is_none() {
            missing.push(DraftField::Genre);
        }
        if self.description.trim().is_empty() {
            missing.push(DraftField::Description);
        }
        missing
    }

    /// Check the required fields and produce a draft that can be handed to a provider
    pub fn validate(&self) -> Result<ValidDraft, ValidationError> {
        let missing = self.missing_fields();
        match self.genre {
            Some(genre) if missing.is_empty() => Ok(ValidDraft {
                title: self.title.clone(),
                genre,
                description: self.description.clone(),
                chapters: self.chapters,
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }

    /// Restore the default form state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A draft that passed validation
///
/// Only [`Draft::validate`] can build one, so providers never see incomplete input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidDraft {
    title: String,
    genre: Genre,
    description: String,
    chapters: ChapterCount,
}

impl ValidDraft {
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
}
