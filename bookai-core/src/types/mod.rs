//! Core types of the BookAI studio

mod book;
mod draft;
mod genre;

pub use book::Book;
pub use draft::{ChapterCount, Draft, DraftField, ValidDraft};
pub use genre::{Genre, GenreInfo};
