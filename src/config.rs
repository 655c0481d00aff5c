//! Configuration for the Pokemon MCP server
//!
//! There is no config file. Every value has a fixed default that the CLI
//! (or matching environment variables) may override.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Default PokeAPI base URL
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default bind host for the local web server (loopback only)
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default outbound request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Pokemon MCP server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Pokemon catalog, without the `/pokemon` suffix
    pub api_base_url: String,

    /// Host the local web server binds to
    pub host: String,

    /// Timeout for catalog requests
    pub request_timeout: Duration,

    /// Open the browser after each successful fetch
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            open_browser: true,
        }
    }
}

impl Config {
    /// Check that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an http(s) URL, the host is empty,
    /// or the timeout is zero
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            Error::Config(format!("invalid api base url {}: {e}", self.api_base_url))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::Config(format!(
                "api base url must be http or https, got {}",
                url.scheme()
            )));
        }

        if url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "api base url cannot be used as a base: {}",
                self.api_base_url
            )));
        }

        if self.host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }

        if self.request_timeout.is_zero() {
            return Err(Error::Config("request timeout must be positive".to_string()));
        }

        Ok(())
    }
}
