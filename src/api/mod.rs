//! Local web server for viewing the current Pokemon
//!
//! Serves the current record as JSON and a small polling page. The server
//! only reads the store; it never talks to the catalog.

use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::pokemon::Pokemon;
use crate::store::PokemonStore;
use crate::{Error, Result};

/// Polling page served at `/` and `/index.html`
pub const INDEX_HTML: &str = include_str!("index.html");

/// Build the router with all routes
pub fn router(store: PokemonStore) -> Router {
    // CORS layer so the JSON endpoint can be read from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/pokemon", get(current_pokemon))
        .route("/", get(index))
        .route("/index.html", get(index))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(store)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Current Pokemon as JSON, `null` when nothing is loaded
async fn current_pokemon(State(store): State<PokemonStore>) -> Json<Option<Pokemon>> {
    Json(store.get().await)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Not Found",
    )
}

/// Web server bound to a local port
pub struct WebServer {
    listener: TcpListener,
    store: PokemonStore,
}

impl WebServer {
    /// Bind to `host` on an OS-assigned port and record the port in the store
    ///
    /// # Errors
    ///
    /// Returns error if the listener cannot be bound
    pub async fn bind(host: &str, store: PokemonStore) -> Result<Self> {
        let listener = TcpListener::bind((host, 0))
            .await
            .map_err(|e| Error::Server(format!("failed to bind web server on {host}: {e}")))?;

        let addr = listener.local_addr()?;
        store.set_port(addr.port());

        tracing::info!(%addr, url = ?store.url(), "local web server listening");

        Ok(Self { listener, store })
    }

    /// Address the server is listening on
    ///
    /// # Errors
    ///
    /// Returns error if the socket address cannot be read
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve requests until `shutdown` resolves
    ///
    /// # Errors
    ///
    /// Returns error if the server fails while running
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, router(self.store))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| Error::Server(format!("web server error: {e}")))
    }

    /// Run the server in a background task
    #[must_use]
    pub fn spawn(self) -> ServerHandle {
        ServerHandle::spawn(|shutdown| async move {
            if let Err(e) = self.run_until(stop_requested(shutdown)).await {
                tracing::error!(error = %e, "web server stopped");
            }
        })
    }
}

/// Bind and serve in the background, logging instead of failing
///
/// The port shows up in the store once the listener is bound. A bind failure
/// leaves the port unset; the tools keep working without the web view.
#[must_use]
pub fn spawn_background(host: String, store: PokemonStore) -> ServerHandle {
    ServerHandle::spawn(|shutdown| async move {
        match WebServer::bind(&host, store).await {
            Ok(server) => {
                if let Err(e) = server.run_until(stop_requested(shutdown)).await {
                    tracing::error!(error = %e, "web server stopped");
                }
            }
            Err(e) => tracing::error!(error = %e, "web view unavailable"),
        }
    })
}

/// Future that completes when the handle asks the server to stop
///
/// A dropped sender counts as a stop request too.
async fn stop_requested(rx: oneshot::Receiver<()>) {
    let _ = rx.await;
}

/// Handle to a running web server
pub struct ServerHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    fn spawn<F, Fut>(serve: F) -> Self
    where
        F: FnOnce(oneshot::Receiver<()>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        Self {
            shutdown_tx: Some(shutdown_tx),
            task: tokio::spawn(serve(shutdown_rx)),
        }
    }

    /// Stop accepting connections and wait for the server to close
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "web server task failed");
        }
        tracing::info!("web server closed");
    }
}
