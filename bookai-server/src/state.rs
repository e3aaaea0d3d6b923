//! Application state

use crate::config::ServerConfig;
use bookai_core::{Catalog, Notification, Session, SimulatedProvider};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The single studio session served by this process
    pub session: Arc<Session>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: &ServerConfig) -> Self {
        let catalog = if config.seed_samples {
            Catalog::with_samples()
        } else {
            Catalog::new()
        };
        let provider = SimulatedProvider::new(config.latency);
        Self::from_session(Session::simulated(catalog, provider))
    }

    pub fn from_session(session: Session) -> Self {
        Self {
            session: Arc::new(session),
        }
    }

    /// Subscribe to studio notifications
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.session.subscribe()
    }
}
