//! Driver configuration

use serde::{Deserialize, Serialize};

/// Configuration for a [`KeypadDriver`](crate::driver::KeypadDriver) and its page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Record dispatched click events on the page
    pub record_events: bool,
    /// Maximum click events kept; the oldest are dropped first
    pub max_events: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            record_events: true,
            max_events: 1000,
        }
    }
}

impl DriverConfig {
    /// Create a new config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable event recording
    #[must_use]
    pub const fn with_record_events(mut self, enabled: bool) -> Self {
        self.record_events = enabled;
        self
    }

    /// Set maximum events
    #[must_use]
    pub const fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }
}
