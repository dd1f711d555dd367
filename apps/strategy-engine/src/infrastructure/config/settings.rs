//! Service Configuration Settings
//!
//! Configuration types for the strategy engine, loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default bind host (loopback, next to the Node.js gateway).
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default HTTP port. The Node.js gateway owns 5000.
const DEFAULT_PORT: u16 = 5001;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Bind address.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerSettings {
    /// Socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Cross-origin settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsSettings {
    /// Explicit origin allow-list. `None` allows every origin.
    pub allowed_origins: Option<Vec<String>>,
}

impl CorsSettings {
    /// Parse a comma-separated origin list. Empty input or `*` means any origin.
    #[must_use]
    pub fn from_origin_list(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            return Self::default();
        }

        Self {
            allowed_origins: Some(origins),
        }
    }

    /// Whether every origin is allowed.
    #[must_use]
    pub const fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_none()
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Cross-origin settings.
    pub cors: CorsSettings,
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STRATEGY_ENGINE_HOST` is set but is not an IP address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `STRATEGY_ENGINE_HOST` is set but is not an IP address.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("STRATEGY_ENGINE_HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|_| {
                ConfigError::InvalidValue("STRATEGY_ENGINE_HOST".to_string(), raw.clone())
            })?,
            None => DEFAULT_HOST,
        };

        let port = parse_u16(&lookup, "STRATEGY_ENGINE_PORT", DEFAULT_PORT);

        let cors = lookup("STRATEGY_ENGINE_CORS_ORIGINS")
            .map(|raw| CorsSettings::from_origin_list(&raw))
            .unwrap_or_default();

        Ok(Self {
            server: ServerSettings { host, port },
            cors,
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable holds a value that cannot be parsed.
    #[error("invalid value for environment variable {0}: {1:?}")]
    InvalidValue(String, String),
}

fn parse_u16<F>(lookup: &F, key: &str, default: u16) -> u16
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.server.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(config.cors.allows_any_origin());
        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:5001");
    }

    #[test]
    fn overrides_host_and_port() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("STRATEGY_ENGINE_HOST", "0.0.0.0"),
            ("STRATEGY_ENGINE_PORT", "6001"),
        ]))
        .unwrap();
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:6001");
    }

    #[test]
    fn unparseable_port_falls_back_to_default() {
        let config =
            ServiceConfig::from_lookup(lookup_from(&[("STRATEGY_ENGINE_PORT", "not-a-port")]))
                .unwrap();
        assert_eq!(config.server.port, 5001);
    }

    #[test]
    fn invalid_host_is_an_error() {
        let error =
            ServiceConfig::from_lookup(lookup_from(&[("STRATEGY_ENGINE_HOST", "localhost:5001")]))
                .unwrap_err();
        assert!(error.to_string().contains("STRATEGY_ENGINE_HOST"));
    }

    #[test]
    fn origin_list_parsing() {
        let cors = CorsSettings::from_origin_list("http://localhost:3000, https://dash.example.com");
        assert_eq!(
            cors.allowed_origins,
            Some(vec![
                "http://localhost:3000".to_string(),
                "https://dash.example.com".to_string()
            ])
        );
        assert!(CorsSettings::from_origin_list("*").allows_any_origin());
        assert!(CorsSettings::from_origin_list(" , ").allows_any_origin());
        assert!(CorsSettings::from_origin_list("http://a.test,*").allows_any_origin());
    }
}
