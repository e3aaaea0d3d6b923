//! Read-only projection of the catalog for display

use crate::catalog::Catalog;
use crate::types::Book;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// One card in the library listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    pub id: Uuid,
    pub title: String,
    pub genre: &'static str,
    pub genre_label: &'static str,
    pub genre_icon: &'static str,
    pub description: String,
    pub chapters: u32,
    pub chapters_label: String,
    pub cover: &'static str,
    pub created_at: NaiveDate,
    pub created_at_display: String,
}

impl From<&Book> for BookCard {
    fn from(book: &Book) -> Self {
        let genre = book.genre();
        let chapters = book.chapters().get();
        Self {
            id: book.id(),
            title: book.title().to_string(),
            genre: genre.key(),
            genre_label: genre.name(),
            genre_icon: genre.icon(),
            description: book.description().to_string(),
            chapters,
            chapters_label: format!("{} глав", chapters),
            cover: book.cover(),
            created_at: book.created_at(),
            created_at_display: format_date(book.created_at()),
        }
    }
}

/// The library tab: a count and the cards, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub count: usize,
    pub count_label: String,
    pub books: Vec<BookCard>,
}

impl CatalogView {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            count: catalog.len(),
            count_label: count_label(catalog.len()),
            books: catalog.iter().map(BookCard::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Date as shown on a card (ru-RU short form)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// "N книга/книги/книг"
pub fn count_label(count: usize) -> String {
    let word = match (count % 10, count % 100) {
        (_, 11..=14) => "книг",
        (1, _) => "книга",
        (2..=4, _) => "книги",
        _ => "книг",
    };
    format!("{} {}", count, word)
}
