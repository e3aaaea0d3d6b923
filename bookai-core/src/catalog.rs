//! In-memory catalog of created books, newest first

use crate::types::{Book, ChapterCount, Draft, Genre};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Ordered collection of committed books
///
/// The only way in is [`Catalog::prepend`], which keeps the newest book at index 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the two sample books the studio starts with
    pub fn with_samples() -> Self {
        let mut catalog = Self::new();
        for (id, title, genre, description, chapters, (y, m, d)) in SAMPLES {
            let draft = Draft::new()
                .with_title(title)
                .with_genre(genre)
                .with_description(description)
                .with_chapters(ChapterCount::saturating(chapters));
            let (Ok(valid), Some(date)) = (draft.validate(), NaiveDate::from_ymd_opt(y, m, d)) else {
                continue;
            };
            catalog.prepend(Book::new(Uuid::from_u128(id), &valid, date));
        }
        catalog
    }

    /// Insert a newly created book at the front
    pub fn prepend(&mut self, book: Book) {
        self.books.insert(0, book);
    }

    pub fn get(&self, id: Uuid) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    pub fn newest(&self) -> Option<&Book> {
        self.books.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

type Sample = (u128, &'static str, Genre, &'static str, u32, (i32, u32, u32));

// Listed in creation order.
const SAMPLES: [Sample; 2] = [
    (
        1,
        "Тайна забытого замка",
        Genre::Fantasy,
        "Магическое путешествие через миры",
        12,
        (2024, 11, 1),
    ),
    (
        2,
        "Последнее дело инспектора",
        Genre::Detective,
        "Расследование века в туманном Лондоне",
        8,
        (2024, 11, 3),
    ),
];
