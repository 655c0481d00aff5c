//! Daemon - wires the store, web server and MCP service together
//!
//! The web server binds in the background while the MCP service starts on
//! stdio. Both stop on SIGINT/SIGTERM or when the MCP client disconnects.

use std::sync::Arc;

use rmcp::transport::IntoTransport;
use rmcp::{RoleServer, ServiceExt};

use crate::api;
use crate::browser::{NoBrowser, SystemBrowser, UrlOpener};
use crate::catalog::CatalogClient;
use crate::store::PokemonStore;
use crate::tools::PokemonTools;
use crate::{Config, Error, Result};

/// The Pokemon MCP daemon
pub struct Daemon {
    config: Config,
}

impl Daemon {
    /// Create a new daemon instance
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build the MCP tool server over `store`
    ///
    /// # Errors
    ///
    /// Returns error if the catalog client cannot be created
    pub fn tools(&self, store: PokemonStore) -> Result<PokemonTools> {
        let catalog = CatalogClient::new(&self.config.api_base_url, self.config.request_timeout)?;

        let opener: Arc<dyn UrlOpener> = if self.config.open_browser {
            Arc::new(SystemBrowser)
        } else {
            Arc::new(NoBrowser)
        };

        Ok(PokemonTools::new(store, catalog, opener))
    }

    /// Run on stdio until interrupted or the MCP client goes away
    ///
    /// # Errors
    ///
    /// Returns error if signal handlers cannot be installed or the MCP
    /// service cannot be started
    pub async fn run(self) -> Result<()> {
        let shutdown = shutdown_signal()?;
        self.run_with(PokemonStore::new(), rmcp::transport::io::stdio(), shutdown).await
    }

    /// Serve MCP on `transport` until the client leaves or `shutdown` resolves
    ///
    /// `shutdown` is honoured from the start, including while the client has
    /// not finished the MCP handshake.
    ///
    /// # Errors
    ///
    /// Returns error if the MCP service cannot be started
    pub async fn run_with<T, E, A, S>(
        self,
        store: PokemonStore,
        transport: T,
        shutdown: S,
    ) -> Result<()>
    where
        T: IntoTransport<RoleServer, E, A> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        S: Future<Output = ()> + Send,
    {
        let tools = self.tools(store.clone())?;
        let web = api::spawn_background(self.config.host.clone(), store);

        let mut shutdown = std::pin::pin!(shutdown);

        tracing::info!("waiting for MCP client");

        let service = tokio::select! {
            started = tools.serve(transport) => match started {
                Ok(service) => service,
                Err(e) => {
                    web.shutdown().await;
                    return Err(Error::Mcp(format!("failed to start MCP service: {e}")));
                }
            },
            () = &mut shutdown => {
                tracing::info!("shutting down before MCP client connected");
                web.shutdown().await;
                tracing::info!("daemon stopped");
                return Ok(());
            }
        };

        tracing::info!("Pokemon MCP server running on stdio");

        tokio::select! {
            quit = service.waiting() => match quit {
                Ok(reason) => tracing::info!(?reason, "MCP service stopped"),
                Err(e) => tracing::warn!(error = %e, "MCP service task failed"),
            },
            () = &mut shutdown => tracing::info!("shutting down"),
        }

        web.shutdown().await;

        tracing::info!("daemon stopped");
        Ok(())
    }
}

/// Resolve on SIGINT or SIGTERM
///
/// Handlers are installed before returning so a signal that arrives early is
/// not lost to the default disposition.
#[cfg(unix)]
fn shutdown_signal() -> Result<impl Future<Output = ()> + Send> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => tracing::info!("received SIGINT"),
            _ = terminate.recv() => tracing::info!("received SIGTERM"),
        }
    })
}

/// Resolve on ctrl-c
#[cfg(not(unix))]
fn shutdown_signal() -> Result<impl Future<Output = ()> + Send> {
    Ok(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    })
}
