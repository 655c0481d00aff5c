//! MCP tools for fetching and inspecting the current Pokemon

pub mod summary;

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::Deserialize;

use crate::browser::UrlOpener;
use crate::catalog::CatalogClient;
use crate::pokemon::PokemonRef;
use crate::store::PokemonStore;

/// Arguments for `fetch-pokemon`
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct FetchPokemonParams {
    /// The Pokemon to fetch by name (e.g. "pikachu") or number (e.g. 25)
    pub pokemon: PokemonRef,
}

/// MCP server exposing `fetch-pokemon` and `get-current-pokemon`
#[derive(Clone)]
pub struct PokemonTools {
    store: PokemonStore,
    catalog: CatalogClient,
    opener: Arc<dyn UrlOpener>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PokemonTools {
    /// Create the tool server over a shared store
    #[must_use]
    pub fn new(store: PokemonStore, catalog: CatalogClient, opener: Arc<dyn UrlOpener>) -> Self {
        Self {
            store,
            catalog,
            opener,
            tool_router: Self::tool_router(),
        }
    }

    /// Store shared with the web server
    #[must_use]
    pub const fn store(&self) -> &PokemonStore {
        &self.store
    }

    #[tool(
        name = "fetch-pokemon",
        description = "Fetch a Pokemon by number or name and display its type on localhost"
    )]
    pub async fn fetch_pokemon(
        &self,
        Parameters(params): Parameters<FetchPokemonParams>,
    ) -> Result<CallToolResult, McpError> {
        let pokemon = params.pokemon;
        pokemon
            .validate()
            .map_err(|message| McpError::invalid_params(message, None))?;

        let Some(found) = self.catalog.fetch(&pokemon).await else {
            return Ok(CallToolResult::success(vec![Content::text(
                summary::fetch_failed(&pokemon),
            )]));
        };

        self.store.set(found.clone()).await;

        let url = self.store.url();
        if let Some(url) = url.as_deref()
            && let Err(e) = self.opener.open(url).await
        {
            tracing::warn!(%url, error = %e, "failed to open browser");
        }

        Ok(CallToolResult::success(vec![Content::text(summary::fetched(
            &found,
            url.as_deref(),
        ))]))
    }

    #[tool(
        name = "get-current-pokemon",
        description = "Get the currently displayed Pokemon information"
    )]
    pub async fn get_current_pokemon(&self) -> Result<CallToolResult, McpError> {
        let text = match self.store.get().await {
            Some(current) => summary::current(&current, self.store.url().as_deref()),
            None => summary::NOTHING_LOADED.to_string(),
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for PokemonTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(
                Implementation::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                    .with_title("Pokemon MCP Server"),
            )
            .with_instructions(
                "Fetch a Pokemon with fetch-pokemon (name or number); it is shown in a local \
                 browser page. get-current-pokemon returns the last fetched one.",
            )
    }
}
