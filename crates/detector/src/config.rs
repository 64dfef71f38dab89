//! Detector configuration.

use std::net::SocketAddr;

use crate::error::DetectorError;

/// Environment variable holding the bind host.
pub const HOST_VAR: &str = "SAD_HOST";
/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "SAD_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 40404;

/// Where the detector listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl DetectorConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `SAD_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, DetectorError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the port is set but not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DetectorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                DetectorError::Config(format!("{PORT_VAR} must be a valid port number: {e}"))
            })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// The socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns an error if host and port do not form a socket address.
    pub fn addr(&self) -> Result<SocketAddr, DetectorError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| DetectorError::Config(format!("invalid address: {e}")))
    }
}
