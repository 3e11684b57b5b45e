//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use super::ServerSettings;

/// Configuration consumed by [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Resolve listener settings into a server configuration.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the configured host does not resolve.
    pub fn from_settings(settings: &ServerSettings) -> std::io::Result<Self> {
        settings.bind_addr().map(Self::new)
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
