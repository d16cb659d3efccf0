//! Runtime logger configuration

use parking_lot::RwLock;

use super::level::LogLevel;

/// Threshold and timestamp settings, read on every submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub threshold: LogLevel,
    pub timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: LogLevel::Info,
            timestamps: false,
        }
    }
}

/// Shared configuration cell.
///
/// Guarded by its own lock, independent of the queue locks, so threshold
/// changes never contend with delivery on either pipeline.
#[derive(Debug, Default)]
pub struct SharedConfig {
    inner: RwLock<Config>,
}

impl SharedConfig {
    pub fn new(config: Config) -> Self {
        Self {
            inner: RwLock::new(config),
        }
    }

    pub fn snapshot(&self) -> Config {
        *self.inner.read()
    }

    pub fn set_threshold(&self, level: LogLevel) {
        self.inner.write().threshold = level;
    }

    pub fn set_timestamps(&self, enabled: bool) {
        self.inner.write().timestamps = enabled;
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level >= self.inner.read().threshold
    }
}
