//! Front-end configuration.
//!
//! Settings only; the CLI fills them from arguments and environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::history::HISTORY_LIMIT;

/// Default directory for the CLI history file.
pub const DEFAULT_HISTORY_DIR: &str = ".flames";

/// Default pause before a result is revealed.
pub const DEFAULT_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the history file.
    pub history_dir: PathBuf,

    /// Maximum number of history entries kept.
    pub history_limit: usize,

    /// How long the flame animation runs before the result is shown.
    pub animation_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            history_dir: PathBuf::from(DEFAULT_HISTORY_DIR),
            history_limit: HISTORY_LIMIT,
            animation_delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.history_dir = dir.into();
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.animation_delay = Duration::from_millis(ms);
        self
    }
}
