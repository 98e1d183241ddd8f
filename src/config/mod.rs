// Configuration module entry point
// Loads layered configuration and exposes the shared runtime state

mod state;
mod types;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Port used when none is given on the command line
pub const DEFAULT_PORT: u16 = 9009;

/// Artifact served when none is configured
pub const DEFAULT_ARTIFACT_PATH: &str = "dist/api.js";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Precedence, lowest first: defaults, config file, `SERVE_API_*`
    /// environment, then `port_override` from the command line.
    pub fn load_from(
        config_path: &str,
        port_override: Option<u16>,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVE_API")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.keep_alive", true)?
            .set_default("artifact.path", DEFAULT_ARTIFACT_PATH)?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_override_option("server.port", port_override.map(i64::from))?
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the listen address, refusing anything reachable off-host.
    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        let ip = if self.server.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.server
                .host
                .parse::<IpAddr>()
                .map_err(|e| format!("Invalid host '{}': {e}", self.server.host))?
        };

        if !ip.is_loopback() {
            return Err(format!(
                "Refusing to bind non-loopback address {ip}; only loopback hosts are allowed"
            ));
        }

        Ok(SocketAddr::new(ip, self.server.port))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::types::{ArtifactConfig, LoggingConfig, ServerConfig};
    use super::*;

    /// Config with defaults and the given artifact, independent of any file on disk
    pub fn test_config(artifact_path: &str) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
                keep_alive: true,
            },
            artifact: ArtifactConfig {
                path: artifact_path.to_string(),
            },
            logging: LoggingConfig {
                access_log: false,
                access_log_format: "combined".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("does-not-exist/serve_api", None).unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, DEFAULT_PORT);
        assert_eq!(cfg.artifact.path, DEFAULT_ARTIFACT_PATH);
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.server.keep_alive);
    }

    #[test]
    fn test_port_override_wins() {
        let cfg = Config::load_from("does-not-exist/serve_api", Some(0)).unwrap();
        assert_eq!(cfg.server.port, 0);

        let cfg = Config::load_from("does-not-exist/serve_api", Some(8123)).unwrap();
        assert_eq!(cfg.server.port, 8123);
    }

    #[test]
    fn test_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("serve_api");
        std::fs::write(
            dir.path().join("serve_api.toml"),
            "[artifact]\npath = \"build/bundle.js\"\n\n[logging]\naccess_log = true\n",
        )
        .unwrap();

        let cfg = Config::load_from(base.to_str().unwrap(), None).unwrap();
        assert_eq!(cfg.artifact.path, "build/bundle.js");
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn test_loopback_hosts_accepted() {
        let mut cfg = test_config("dist/api.js");
        cfg.server.port = 9009;
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:9009".parse::<SocketAddr>().unwrap()
        );

        cfg.server.host = "localhost".to_string();
        assert!(cfg.get_socket_addr().unwrap().ip().is_loopback());

        cfg.server.host = "::1".to_string();
        assert!(cfg.get_socket_addr().unwrap().is_ipv6());
    }

    #[test]
    fn test_non_loopback_host_rejected() {
        let mut cfg = test_config("dist/api.js");
        cfg.server.host = "0.0.0.0".to_string();
        assert!(cfg.get_socket_addr().is_err());

        cfg.server.host = "192.168.1.10".to_string();
        assert!(cfg.get_socket_addr().is_err());

        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
