//! Application state container
//!
//! Shared application state passed to all request handlers via Axum's
//! state extraction. Cheaply cloneable via Arc.

use crate::config::Settings;
use crate::services::{ShortboxedConfig, ShortboxedService};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Shortboxed catalog client
    pub shortboxed: Arc<ShortboxedService>,

    /// Application start time (for uptime calculation)
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let settings = Arc::new(settings);

        let mut config =
            ShortboxedConfig::default().with_timeout(settings.shortboxed_timeout_seconds);
        if let Some(base_url) = &settings.shortboxed_base_url {
            config = config.with_base_url(base_url);
        }

        tracing::debug!(
            base_url = ?settings.shortboxed_base_url,
            timeout_seconds = settings.shortboxed_timeout_seconds,
            "Creating Shortboxed client"
        );
        let shortboxed = Arc::new(ShortboxedService::new(config)?);

        Ok(Self {
            settings,
            shortboxed,
            start_time: Instant::now(),
        })
    }

    /// Get the application uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_construction() {
        let state = AppState::new(Settings::default()).unwrap();
        assert!(state.shortboxed.health_check());
        assert_eq!(state.settings.app_name, "comic-box");
    }
}
