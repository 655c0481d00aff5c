//! Current-record store shared by the MCP tools and the web server

use std::sync::{Arc, OnceLock};

use tokio::sync::RwLock;

use crate::pokemon::Pokemon;

/// Single-slot holder of the current Pokemon and the web server port
///
/// Cloning is cheap and every clone sees the same slot.
#[derive(Debug, Clone, Default)]
pub struct PokemonStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    current: RwLock<Option<Pokemon>>,
    port: OnceLock<u16>,
}

impl PokemonStore {
    /// Create an empty store with no port bound
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current Pokemon
    pub async fn set(&self, pokemon: Pokemon) {
        *self.inner.current.write().await = Some(pokemon);
    }

    /// Get a copy of the current Pokemon, if any
    pub async fn get(&self) -> Option<Pokemon> {
        self.inner.current.read().await.clone()
    }

    /// Record the bound web server port
    ///
    /// The port is assigned once; later calls are ignored.
    pub fn set_port(&self, port: u16) {
        if let Err(rejected) = self.inner.port.set(port) {
            tracing::warn!(
                port = rejected,
                bound = ?self.port(),
                "web server port already set, ignoring"
            );
        }
    }

    /// Bound web server port, `None` until the server is listening
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.inner.port.get().copied()
    }

    /// Browser URL of the web view, `None` until the server is listening
    #[must_use]
    pub fn url(&self) -> Option<String> {
        self.port().map(|port| format!("http://localhost:{port}"))
    }
}
