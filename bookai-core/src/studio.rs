//! Synchronous state machine behind the studio screens

use crate::catalog::Catalog;
use crate::error::{BookaiError, GenerationError, Result, ValidationError};
use crate::notification::Notification;
use crate::types::{Book, Draft, Genre, ValidDraft};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level tab of the studio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Create,
    Library,
}

/// What the user is currently looking at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub tab: Tab,
    pub dialog_open: bool,
}

/// Catalog, draft and creation state of one studio session
#[derive(Debug, Default)]
pub struct Studio {
    catalog: Catalog,
    draft: Draft,
    screen: Screen,
    creating: bool,
    outbox: Vec<Notification>,
}

impl Studio {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_creating(&self) -> bool {
        self.creating
    }

    /// Mutable access to the draft for field edits
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn reset_draft(&mut self) {
        self.draft.reset();
    }

    /// Genre tile on the home screen: preselect the genre and open the dialog
    pub fn pick_genre(&mut self, genre: Genre) {
        self.draft.genre = Some(genre);
        self.screen.dialog_open = true;
    }

    pub fn open_dialog(&mut self) {
        self.screen.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.screen.dialog_open = false;
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.screen.tab = tab;
    }

    /// Start a creation
    ///
    /// Returns `Ok(None)` when a creation is already in flight; nothing changes in that case.
    /// On a validation failure the draft stays as it was for correction.
    pub fn begin_create(&mut self) -> std::result::Result<Option<ValidDraft>, ValidationError> {
        if self.creating {
            tracing::debug!("creation already in flight, ignoring");
            return Ok(None);
        }

        match self.draft.validate() {
            Ok(valid) => {
                self.creating = true;
                tracing::info!(title = valid.title(), genre = %valid.genre(), "creating book");
                Ok(Some(valid))
            }
            Err(e) => {
                tracing::debug!(error = %e, "draft rejected");
                self.outbox.push(Notification::error(e.user_message()));
                Err(e)
            }
        }
    }

    /// Complete a creation started with [`Studio::begin_create`]
    pub fn finish_create(
        &mut self,
        generated: std::result::Result<Book, GenerationError>,
    ) -> Result<Book> {
        self.creating = false;

        match generated {
            Ok(book) => {
                tracing::info!(id = %book.id(), title = book.title(), "book committed");
                self.catalog.prepend(book.clone());
                self.draft.reset();
                self.screen = Screen {
                    tab: Tab::Library,
                    dialog_open: false,
                };
                self.outbox.push(Notification::success(
                    "Книга создана! ИИ начинает генерацию глав...",
                ));
                Ok(book)
            }
            Err(e) => {
                tracing::warn!(error = %e, "book generation failed");
                self.outbox
                    .push(Notification::error(format!("Не удалось создать книгу: {}", e)));
                Err(e.into())
            }
        }
    }

    /// "Read" action on a catalog card
    pub fn read(&mut self, id: Uuid) -> Result<Notification> {
        let book = self.catalog.get(id).ok_or(BookaiError::NotFound(id))?;
        let notification = Notification::info(format!("Открываем книгу \"{}\"...", book.title()));
        self.outbox.push(notification.clone());
        Ok(notification)
    }

    /// Record a notification produced outside the studio
    pub fn notify(&mut self, notification: Notification) {
        self.outbox.push(notification);
    }

    /// Take all pending notifications
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }
}
