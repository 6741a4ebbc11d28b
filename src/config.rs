//! Server settings from the environment: HOST (default 0.0.0.0), PORT (default 8080).

use std::time::Duration;

/// Tournaments not accessed for this long are removed from the store.
pub const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// How often the store is swept for inactive tournaments.
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(30 * 60);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. An unparsable PORT falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or_else(default_port);
        Self { host, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ServerConfig::from_lookup(|_| None), ServerConfig::default());
    }

    #[test]
    fn reads_host_and_port() {
        let cfg = ServerConfig::from_lookup(|key| match key {
            "HOST" => Some("127.0.0.1".to_string()),
            "PORT" => Some("9090".to_string()),
            _ => None,
        });
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 9090);
    }

    #[test]
    fn bad_port_falls_back() {
        let cfg = ServerConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));
        assert_eq!(cfg.port, 8080);
    }
}
