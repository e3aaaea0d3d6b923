//! Create command implementation

use anyhow::{bail, Context, Result};
use bookai_core::{ChapterCount, CreateOutcome, Genre, Level, Session, SimulatedProvider};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Arguments of the create command
pub struct CreateArgs {
    pub title: String,
    pub genre: Option<Genre>,
    pub description: String,
    pub chapters: ChapterCount,
    pub latency_ms: u64,
    pub empty: bool,
    pub json: bool,
}

/// Create a book in a fresh session and print the resulting library
pub async fn create(args: CreateArgs) -> Result<()> {
    let provider = SimulatedProvider::new(Duration::from_millis(args.latency_ms));
    let session = Session::simulated(super::starting_catalog(args.empty), provider);
    let mut events = session.subscribe();

    session
        .edit_draft(|draft| {
            draft.title = args.title;
            draft.genre = args.genre;
            draft.description = args.description;
            draft.chapters = args.chapters;
        })
        .await;

    let spinner = ProgressBar::new_spinner();
    if !args.json && args.latency_ms > 0 {
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .context("Invalid spinner template")?,
        );
        spinner.set_message("Создаём магию...");
        spinner.enable_steady_tick(Duration::from_millis(100));
    }

    let outcome = session.create_book().await;
    spinner.finish_and_clear();

    // Surface every notification the studio emitted
    while let Ok(notification) = events.try_recv() {
        match notification.level {
            Level::Error => eprintln!("{}", notification.message),
            _ if !args.json => println!("{}", notification.message),
            _ => {}
        }
    }

    match outcome {
        Ok(CreateOutcome::Created(book)) => {
            tracing::debug!(id = %book.id(), "book created");
        }
        Ok(CreateOutcome::AlreadyCreating) => bail!("A book is already being created"),
        Err(e) => bail!("Failed to create book: {}", e),
    }

    let view = session.view().await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!();
        super::print_view(&view);
    }
    Ok(())
}
