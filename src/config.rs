use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Process settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Raw `PORT` value that failed to parse; logged once tracing is up.
    pub invalid_port: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            invalid_port: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let raw_port = lookup("PORT");
        let parsed_port = raw_port.as_deref().map(|raw| raw.trim().parse::<u16>());
        let (port, invalid_port) = match parsed_port {
            Some(Ok(port)) => (port, None),
            Some(Err(_)) => (DEFAULT_PORT, raw_port),
            None => (defaults.port, None),
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            invalid_port,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Next port up, tried once when the configured one is taken.
    pub fn fallback_addr(&self) -> Option<SocketAddr> {
        let port = self.port.checked_add(1)?;
        format!("{}:{}", self.host, port).parse().ok()
    }
}
