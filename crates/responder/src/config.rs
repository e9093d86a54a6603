//! Application configuration.

/// Port the responder listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration.
///
/// The bind address is fixed at `0.0.0.0:8080`. Only the tracing filter is
/// read from the environment (`RUST_LOG`, default: `"info"`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Loads configuration, taking the log filter from `RUST_LOG` when set.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ..Self::default()
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}
