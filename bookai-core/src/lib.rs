//! BookAI Core Library
//!
//! This crate provides the domain types and the creation workflow of the BookAI studio.
//! A [`Draft`] is edited, validated into a [`ValidDraft`], handed to a
//! [`GenerationProvider`], and the resulting [`Book`] is prepended to the [`Catalog`].

pub mod catalog;
pub mod error;
pub mod export;
pub mod notification;
pub mod provider;
pub mod session;
pub mod studio;
pub mod types;
pub mod view;

pub use catalog::Catalog;
pub use error::{BookaiError, ExportError, GenerationError, Result, ValidationError};
pub use export::{AnnouncingExporter, Exporter};
pub use notification::{Level, Notification};
pub use provider::{GenerationProvider, SimulatedProvider};
pub use session::{CreateOutcome, Session};
pub use studio::{Screen, Studio, Tab};
pub use types::{Book, ChapterCount, Draft, DraftField, Genre, GenreInfo, ValidDraft};
pub use view::{BookCard, CatalogView};
