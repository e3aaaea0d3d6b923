//! Server configuration read from the environment

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

/// Runtime settings for the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address (`BOOKAI_ADDR`)
    pub addr: SocketAddr,

    /// Simulated generation latency (`BOOKAI_LATENCY_MS`)
    pub latency: Duration,

    /// Start with the sample books (`BOOKAI_SEED_SAMPLES`)
    pub seed_samples: bool,

    /// Allowed CORS origins, `*` or a comma-separated list (`BOOKAI_CORS_ORIGINS`)
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            latency: Duration::from_millis(2000),
            seed_samples: true,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup("BOOKAI_ADDR") {
            config.addr = addr
                .parse()
                .with_context(|| format!("Invalid BOOKAI_ADDR: {}", addr))?;
        }

        if let Some(ms) = lookup("BOOKAI_LATENCY_MS") {
            let ms: u64 = ms
                .parse()
                .with_context(|| format!("Invalid BOOKAI_LATENCY_MS: {}", ms))?;
            config.latency = Duration::from_millis(ms);
        }

        if let Some(seed) = lookup("BOOKAI_SEED_SAMPLES") {
            config.seed_samples = match seed.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => anyhow::bail!("Invalid BOOKAI_SEED_SAMPLES: {}", other),
            };
        }

        config.cors_origins = lookup("BOOKAI_CORS_ORIGINS").filter(|s| !s.trim().is_empty());

        Ok(config)
    }
}
