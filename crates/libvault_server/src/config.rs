//! Server configuration.

use std::net::SocketAddr;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Whether to attach a permissive CORS layer (any origin, any method).
    /// The demo UI is served from a different origin, so this defaults on.
    pub permissive_cors: bool,
}

impl ServerConfig {
    /// Creates a configuration binding the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            permissive_cors: true,
        }
    }

    /// Sets whether the permissive CORS layer is attached.
    #[must_use]
    pub const fn with_permissive_cors(mut self, value: bool) -> Self {
        self.permissive_cors = value;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8000)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.permissive_cors);
    }

    #[test]
    fn builder() {
        let config = ServerConfig::new("0.0.0.0:9000".parse().unwrap()).with_permissive_cors(false);
        assert_eq!(config.bind_addr.port(), 9000);
        assert!(!config.permissive_cors);
    }
}
