//! Store configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "LIBVAULT_DATA_DIR";

/// Configuration for opening a document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory for persisted collections. `None` selects the in-memory
    /// backend.
    pub data_dir: Option<PathBuf>,

    /// Bounded wait for backend locks. Expiry surfaces as unavailability,
    /// never as an indefinite block.
    pub lock_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            lock_timeout: Duration::from_secs(5),
        }
    }
}

impl StoreConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data directory, selecting the file backend.
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Sets the lock timeout.
    #[must_use]
    pub const fn lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    /// Builds a configuration from the environment.
    ///
    /// Reads [`DATA_DIR_ENV`]; when unset the in-memory backend is used.
    /// A missing variable is not an error and never prevents startup.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_in_memory() {
        let config = StoreConfig::default();
        assert!(config.data_dir.is_none());
        assert_eq!(config.lock_timeout, Duration::from_secs(5));
    }

    #[test]
    fn builder_pattern() {
        let config = StoreConfig::new()
            .data_dir("/tmp/libvault")
            .lock_timeout(Duration::from_millis(100));

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/libvault")));
        assert_eq!(config.lock_timeout, Duration::from_millis(100));
    }
}
