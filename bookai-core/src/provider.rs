//! Book generation providers

use crate::error::GenerationError;
use crate::types::{Book, ValidDraft};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

/// Result type for generation
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

/// Something that turns a validated draft into a book
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate a book for the given draft
    async fn generate(&self, draft: &ValidDraft) -> GenerationResult<Book>;

    /// Provider name for logs
    fn name(&self) -> &str;
}

/// Provider that waits a fixed latency and then fabricates the book locally
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    latency: Duration,
    today: fn() -> NaiveDate,
}

impl SimulatedProvider {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            today: local_today,
        }
    }

    /// Provider that commits without waiting
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Override the calendar used for creation dates
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[async_trait]
impl GenerationProvider for SimulatedProvider {
    async fn generate(&self, draft: &ValidDraft) -> GenerationResult<Book> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Book::create(draft, (self.today)()))
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
