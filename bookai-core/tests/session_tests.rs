//! Session tests for bookai-core
//!
//! These tests drive the full creation workflow through [`Session`] with
//! deterministic providers instead of a timer.

use async_trait::async_trait;
use bookai_core::error::GenerationError;
use bookai_core::provider::GenerationResult;
use bookai_core::{
    AnnouncingExporter, Book, BookaiError, Catalog, ChapterCount, CreateOutcome, Draft,
    GenerationProvider, Genre, Level, Session, SimulatedProvider, Tab, ValidDraft,
    ValidationError,
};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};

// =============================================================================
// Helpers
// =============================================================================

fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 20).unwrap()
}

fn instant_session(catalog: Catalog) -> Session {
    Session::simulated(catalog, SimulatedProvider::instant().with_clock(fixed_day))
}

async fn fill(session: &Session, title: &str, genre: Option<Genre>, description: &str) {
    session
        .edit_draft(|d| {
            d.title = title.to_string();
            d.genre = genre;
            d.description = description.to_string();
        })
        .await;
}

/// Provider that blocks until released
struct GatedProvider {
    started: Notify,
    release: Notify,
}

impl GatedProvider {
    fn new() -> Self {
        Self {
            started: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl GenerationProvider for GatedProvider {
    async fn generate(&self, draft: &ValidDraft) -> GenerationResult<Book> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(Book::create(draft, fixed_day()))
    }

    fn name(&self) -> &str {
        "gated"
    }
}

/// Provider that always fails
struct FailingProvider;

#[async_trait]
impl GenerationProvider for FailingProvider {
    async fn generate(&self, _draft: &ValidDraft) -> GenerationResult<Book> {
        Err(GenerationError::Unavailable("offline".to_string()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Provider that records every draft it receives
#[derive(Default)]
struct RecordingProvider {
    seen: Mutex<Vec<ValidDraft>>,
}

#[async_trait]
impl GenerationProvider for RecordingProvider {
    async fn generate(&self, draft: &ValidDraft) -> GenerationResult<Book> {
        self.seen.lock().await.push(draft.clone());
        Ok(Book::create(draft, fixed_day()))
    }

    fn name(&self) -> &str {
        "recording"
    }
}

// =============================================================================
// Creation
// =============================================================================

#[tokio::test]
async fn test_valid_draft_is_committed_first() {
    let session = instant_session(Catalog::with_samples());
    fill(&session, "A", Some(Genre::Fantasy), "B").await;

    let outcome = session.create_book().await.unwrap();
    let CreateOutcome::Created(book) = outcome else {
        panic!("expected a created book");
    };

    let view = session.view().await;
    assert_eq!(view.count, 3);
    let first = &view.books[0];
    assert_eq!(first.id, book.id());
    assert_eq!(first.title, "A");
    assert_eq!(first.genre, "fantasy");
    assert_eq!(first.description, "B");
    assert_eq!(first.chapters, 5);
    assert_eq!(first.cover, Genre::Fantasy.cover());
    assert_eq!(first.created_at, fixed_day());

    assert_eq!(session.draft().await, Draft::default());
    assert_eq!(session.screen().await.tab, Tab::Library);
    assert!(!session.is_creating().await);
}

#[tokio::test]
async fn test_missing_title_is_rejected() {
    let session = instant_session(Catalog::with_samples());
    fill(&session, "", Some(Genre::Romance), "B").await;
    let mut events = session.subscribe();

    let err = session.create_book().await.unwrap_err();
    assert!(matches!(
        err,
        BookaiError::Validation(ValidationError::MissingFields(_))
    ));
    assert_eq!(session.view().await.count, 2);
    assert_eq!(session.draft().await.genre, Some(Genre::Romance));

    let event = events.recv().await.unwrap();
    assert_eq!(event.level, Level::Error);
    assert_eq!(event.message, "Заполните все поля");
}

#[tokio::test]
async fn test_every_incomplete_draft_is_rejected() {
    let cases = [
        ("", Some(Genre::Fantasy), "B"),
        ("A", None, "B"),
        ("A", Some(Genre::Scifi), ""),
        ("", None, ""),
    ];
    for (title, genre, description) in cases {
        let session = instant_session(Catalog::new());
        fill(&session, title, genre, description).await;
        assert!(session.create_book().await.is_err());
        assert!(session.view().await.is_empty());
    }
}

#[tokio::test]
async fn test_second_create_while_pending_is_noop() {
    let provider = Arc::new(GatedProvider::new());
    let session = Arc::new(Session::new(
        Catalog::new(),
        provider.clone(),
        Arc::new(AnnouncingExporter),
    ));
    fill(&session, "A", Some(Genre::Detective), "B").await;

    let first = tokio::spawn({
        let session = session.clone();
        async move { session.create_book().await }
    });
    provider.started.notified().await;
    assert!(session.is_creating().await);

    let second = session.create_book().await.unwrap();
    assert_eq!(second, CreateOutcome::AlreadyCreating);
    assert_eq!(session.view().await.count, 0);

    provider.release.notify_one();
    let first = first.await.unwrap().unwrap();
    assert!(matches!(first, CreateOutcome::Created(_)));
    assert_eq!(session.view().await.count, 1);
    assert!(!session.is_creating().await);
}

#[tokio::test]
async fn test_provider_failure_keeps_draft() {
    let session = Session::new(
        Catalog::with_samples(),
        Arc::new(FailingProvider),
        Arc::new(AnnouncingExporter),
    );
    fill(&session, "A", Some(Genre::Scifi), "B").await;

    let err = session.create_book().await.unwrap_err();
    assert!(matches!(err, BookaiError::Generation(_)));
    assert_eq!(session.view().await.count, 2);
    assert_eq!(session.draft().await.title, "A");
    assert!(!session.is_creating().await);
}

#[tokio::test]
async fn test_provider_receives_draft_fields() {
    let provider = Arc::new(RecordingProvider::default());
    let session = Session::new(Catalog::new(), provider.clone(), Arc::new(AnnouncingExporter));
    session
        .edit_draft(|d| {
            d.title = "Title".to_string();
            d.genre = Some(Genre::Romance);
            d.description = "Plot".to_string();
            d.chapters = ChapterCount::try_from(14).unwrap();
        })
        .await;

    session.create_book().await.unwrap();

    let seen = provider.seen.lock().await;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].title(), "Title");
    assert_eq!(seen[0].genre(), Genre::Romance);
    assert_eq!(seen[0].chapters().get(), 14);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_latency_commits_after_delay() {
    let session = Arc::new(Session::simulated(
        Catalog::new(),
        SimulatedProvider::new(Duration::from_secs(2)).with_clock(fixed_day),
    ));
    fill(&session, "A", Some(Genre::Fantasy), "B").await;

    let task = tokio::spawn({
        let session = session.clone();
        async move { session.create_book().await }
    });

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(session.is_creating().await);
    assert!(session.view().await.is_empty());

    tokio::time::sleep(Duration::from_millis(600)).await;
    task.await.unwrap().unwrap();
    assert_eq!(session.view().await.count, 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_caller_still_commits() {
    let session = Session::simulated(
        Catalog::new(),
        SimulatedProvider::new(Duration::from_secs(2)).with_clock(fixed_day),
    );
    fill(&session, "A", Some(Genre::Fantasy), "B").await;

    let timed_out = tokio::time::timeout(Duration::from_millis(500), session.create_book()).await;
    assert!(timed_out.is_err());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(!session.is_creating().await);
    let view = session.view().await;
    assert_eq!(view.count, 1);
    assert_eq!(view.books[0].title, "A");

    fill(&session, "C", Some(Genre::Romance), "D").await;
    let outcome = session.create_book().await.unwrap();
    assert!(matches!(outcome, CreateOutcome::Created(_)));
    assert_eq!(session.view().await.count, 2);
}

/// Provider that panics mid-generation
struct PanickingProvider;

#[async_trait]
impl GenerationProvider for PanickingProvider {
    async fn generate(&self, _draft: &ValidDraft) -> GenerationResult<Book> {
        panic!("generator crashed");
    }

    fn name(&self) -> &str {
        "panicking"
    }
}

#[tokio::test]
async fn test_provider_panic_releases_guard() {
    let session = Session::new(
        Catalog::new(),
        Arc::new(PanickingProvider),
        Arc::new(AnnouncingExporter),
    );
    fill(&session, "A", Some(Genre::Detective), "B").await;

    let err = session.create_book().await.unwrap_err();
    assert!(matches!(err, BookaiError::Generation(_)));
    assert!(!session.is_creating().await);
    assert!(session.view().await.is_empty());
    assert_eq!(session.draft().await.title, "A");
}

#[tokio::test]
async fn test_ids_distinct_across_creations() {
    let session = instant_session(Catalog::new());
    for title in ["one", "two", "three"] {
        fill(&session, title, Some(Genre::Detective), "plot").await;
        session.create_book().await.unwrap();
    }
    let view = session.view().await;
    let titles: Vec<&str> = view.books.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["three", "two", "one"]);
    assert_ne!(view.books[0].id, view.books[1].id);
    assert_ne!(view.books[1].id, view.books[2].id);
}

// =============================================================================
// Stub actions
// =============================================================================

#[tokio::test]
async fn test_read_and_export_notify() {
    let session = instant_session(Catalog::with_samples());
    let id = session.view().await.books[0].id;
    let mut events = session.subscribe();

    let read = session.read(id).await.unwrap();
    assert_eq!(read.level, Level::Info);
    assert_eq!(
        read.message,
        "Открываем книгу \"Последнее дело инспектора\"..."
    );

    let export = session.export(id).await.unwrap();
    assert_eq!(export.level, Level::Success);
    assert_eq!(
        export.message,
        "Экспорт книги \"Последнее дело инспектора\" начат!"
    );

    assert_eq!(events.recv().await.unwrap(), read);
    assert_eq!(events.recv().await.unwrap(), export);
    assert_eq!(session.view().await.count, 2);
}

#[tokio::test]
async fn test_actions_on_unknown_book() {
    let session = instant_session(Catalog::new());
    let id = uuid::Uuid::nil();
    assert!(matches!(session.read(id).await, Err(BookaiError::NotFound(_))));
    assert!(matches!(session.export(id).await, Err(BookaiError::NotFound(_))));
}

#[tokio::test]
async fn test_pick_genre_then_create() {
    let session = instant_session(Catalog::new());
    let screen = session.pick_genre(Genre::Scifi).await;
    assert!(screen.dialog_open);

    session
        .edit_draft(|d| {
            d.title = "Stars".to_string();
            d.description = "Far away".to_string();
        })
        .await;
    session.create_book().await.unwrap();

    let screen = session.screen().await;
    assert!(!screen.dialog_open);
    assert_eq!(screen.tab, Tab::Library);
    assert_eq!(session.view().await.books[0].genre, "scifi");
}
