// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub artifact: ArtifactConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Must be a loopback address
    pub host: String,
    /// 0 lets the OS pick a free port
    pub port: u16,
    pub workers: Option<usize>,
    /// HTTP/1 keep-alive; idle connections stay open until the client or
    /// shutdown closes them
    pub keep_alive: bool,
}

/// The single file served for every request
#[derive(Debug, Deserialize, Clone)]
pub struct ArtifactConfig {
    /// Relative paths resolve against the working directory
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}
