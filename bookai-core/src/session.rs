//! Async driver owning one studio and its collaborators

use crate::catalog::Catalog;
use crate::error::{BookaiError, GenerationError, Result};
use crate::export::{AnnouncingExporter, Exporter};
use crate::notification::Notification;
use crate::provider::{GenerationProvider, SimulatedProvider};
use crate::studio::{Screen, Studio};
use crate::types::{Book, Draft, Genre};
use crate::view::CatalogView;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

/// Result of a create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The book was generated and committed
    Created(Book),

    /// Another creation was in flight; nothing happened
    AlreadyCreating,
}

/// One studio session
///
/// The state lock is never held while the provider or exporter is awaited.
/// Generation runs on its own task, so a creation commits even if the caller goes away.
pub struct Session {
    studio: Arc<RwLock<Studio>>,
    provider: Arc<dyn GenerationProvider>,
    exporter: Arc<dyn Exporter>,
    events: broadcast::Sender<Notification>,
}

impl Session {
    pub fn new(
        catalog: Catalog,
        provider: Arc<dyn GenerationProvider>,
        exporter: Arc<dyn Exporter>,
    ) -> Self {
        let (events, _) = broadcast::channel(100);
        Self {
            studio: Arc::new(RwLock::new(Studio::new(catalog))),
            provider,
            exporter,
            events,
        }
    }

    /// Session backed by the simulated provider and the announcing exporter
    pub fn simulated(catalog: Catalog, provider: SimulatedProvider) -> Self {
        Self::new(catalog, Arc::new(provider), Arc::new(AnnouncingExporter))
    }

    /// Subscribe to notifications
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.events.subscribe()
    }

    fn publish(&self, studio: &mut Studio) {
        publish(&self.events, studio);
    }

    pub async fn draft(&self) -> Draft {
        self.studio.read().await.draft().clone()
    }

    /// Apply an edit to the draft and return the updated copy
    pub async fn edit_draft<F>(&self, edit: F) -> Draft
    where
        F: FnOnce(&mut Draft),
    {
        let mut studio = self.studio.write().await;
        edit(studio.draft_mut());
        studio.draft().clone()
    }

    pub async fn reset_draft(&self) -> Draft {
        let mut studio = self.studio.write().await;
        studio.reset_draft();
        studio.draft().clone()
    }

    pub async fn pick_genre(&self, genre: Genre) -> Screen {
        let mut studio = self.studio.write().await;
        studio.pick_genre(genre);
        studio.screen()
    }

    pub async fn screen(&self) -> Screen {
        self.studio.read().await.screen()
    }

    pub async fn is_creating(&self) -> bool {
        self.studio.read().await.is_creating()
    }

    /// Validate the draft, generate a book and commit it to the catalog
    pub async fn create_book(&self) -> Result<CreateOutcome> {
        let valid = {
            let mut studio = self.studio.write().await;
            let begun = studio.begin_create();
            self.publish(&mut studio);
            match begun? {
                Some(valid) => valid,
                None => return Ok(CreateOutcome::AlreadyCreating),
            }
        };

        let studio = self.studio.clone();
        let provider = self.provider.clone();
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            tracing::debug!(provider = provider.name(), "awaiting generation");
            let generated = provider.generate(&valid).await;

            let mut studio = studio.write().await;
            let committed = studio.finish_create(generated);
            publish(&events, &mut studio);
            committed
        });

        match task.await {
            Ok(committed) => committed.map(CreateOutcome::Created),
            Err(e) => {
                // The provider panicked; release the guard so the studio stays usable
                tracing::error!(error = %e, "generation task failed");
                let mut studio = self.studio.write().await;
                let failed = studio.finish_create(Err(GenerationError::Unavailable(
                    "generation task failed".to_string(),
                )));
                self.publish(&mut studio);
                failed.map(CreateOutcome::Created)
            }
        }
    }

    /// Projection of the catalog for display
    pub async fn view(&self) -> CatalogView {
        CatalogView::new(self.studio.read().await.catalog())
    }

    pub async fn book(&self, id: Uuid) -> Result<Book> {
        self.studio
            .read()
            .await
            .catalog()
            .get(id)
            .cloned()
            .ok_or(BookaiError::NotFound(id))
    }

    /// "Read" stub action
    pub async fn read(&self, id: Uuid) -> Result<Notification> {
        let mut studio = self.studio.write().await;
        let read = studio.read(id);
        self.publish(&mut studio);
        read
    }

    /// "Export" stub action, delegated to the exporter
    pub async fn export(&self, id: Uuid) -> Result<Notification> {
        let book = self.book(id).await?;
        let notification = self.exporter.export(&book).await?;

        let mut studio = self.studio.write().await;
        studio.notify(notification.clone());
        self.publish(&mut studio);
        Ok(notification)
    }
}

fn publish(events: &broadcast::Sender<Notification>, studio: &mut Studio) {
    for notification in studio.drain_notifications() {
        // Ignore errors (no subscribers)
        let _ = events.send(notification);
    }
}
