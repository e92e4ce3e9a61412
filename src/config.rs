// src/config.rs
// Environment-based configuration - single source of truth for env vars

use tracing::Level;

/// Configuration read from the environment at startup.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Log level override (`FILE_EXPORT_LOG`), e.g. `debug`.
    pub log_level: Option<Level>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: read_level("FILE_EXPORT_LOG"),
        }
    }

    /// Effective log level: the override, or the given default.
    pub fn log_level_or(&self, default: Level) -> Level {
        self.log_level.unwrap_or(default)
    }
}

/// Read a log level from an env var, ignoring empty and unparseable
/// values. Misconfiguration falls back to the default, it never fails
/// startup.
fn read_level(name: &str) -> Option<Level> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| v.trim().parse::<Level>().ok())
}
