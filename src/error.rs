//! Error types for the Pokemon MCP server

use thiserror::Error;

/// Result type alias for Pokemon MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Pokemon MCP server
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Catalog lookup failed (non-success status, bad identifier)
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Browser launch error
    #[error("browser error: {0}")]
    Browser(String),

    /// Local web server error
    #[error("web server error: {0}")]
    Server(String),

    /// MCP transport error
    #[error("mcp error: {0}")]
    Mcp(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing error
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
}
