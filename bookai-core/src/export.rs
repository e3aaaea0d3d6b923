//! Export collaborators

use crate::error::ExportError;
use crate::notification::Notification;
use crate::types::Book;
use async_trait::async_trait;

/// Something that exports a book out of the studio
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Start exporting the book, returning the message to show the user
    async fn export(&self, book: &Book) -> Result<Notification, ExportError>;
}

/// Exporter that only announces the export; no file is produced
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnouncingExporter;

#[async_trait]
impl Exporter for AnnouncingExporter {
    async fn export(&self, book: &Book) -> Result<Notification, ExportError> {
        tracing::debug!(id = %book.id(), "export requested");
        Ok(Notification::success(format!(
            "Экспорт книги \"{}\" начат!",
            book.title()
        )))
    }
}
