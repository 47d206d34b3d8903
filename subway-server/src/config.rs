//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind on.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `SUBWAY_HOST` and `SUBWAY_PORT` override the defaults. Unset
    /// variables fall back silently; values that fail to parse are
    /// reported and ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = match std::env::var("SUBWAY_HOST") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                eprintln!(
                    "Warning: invalid SUBWAY_HOST {raw:?}, using {}",
                    defaults.host
                );
                defaults.host
            }),
            Err(_) => defaults.host,
        };

        let port = match std::env::var("SUBWAY_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                eprintln!(
                    "Warning: invalid SUBWAY_PORT {raw:?}, using {}",
                    defaults.port
                );
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        Self { host, port }
    }

    /// Returns the socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn addr_combines_host_and_port() {
        let config = ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 9090,
        };

        assert_eq!(config.addr().to_string(), "0.0.0.0:9090");
    }

    #[test]
    fn default_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    }
}
