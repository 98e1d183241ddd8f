// Application state module
// Read-only state shared by every connection

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Whether each request gets an access log line
    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }

    /// Path of the artifact served for every request
    pub fn artifact_path(&self) -> &str {
        &self.config.artifact.path
    }
}
