//! PokeAPI catalog client
//!
//! One GET per lookup. Any failure (transport, non-success status, bad body)
//! is logged and flattened to `None` so tool handlers never see an error.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::pokemon::{Pokemon, PokemonRef, PokemonType};
use crate::{Error, Result};

/// Subset of the `/pokemon/{id}` response the server keeps
///
/// Every other field of the upstream payload is dropped on deserialization.
#[derive(Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    types: Vec<PokemonType>,
    height: u32,
    weight: u32,
}

impl From<PokemonResponse> for Pokemon {
    fn from(r: PokemonResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            types: r.types,
            height: r.height,
            weight: r.weight,
        }
    }
}

/// HTTP client for the Pokemon catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client for the given base URL (e.g. `https://pokeapi.co/api/v2`)
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("not a base url: {base_url}")));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokemon-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Http)?;

        Ok(Self { client, base_url })
    }

    /// Build `{base}/pokemon/{id}`, encoding the identifier as one segment
    fn pokemon_url(&self, pokemon: &PokemonRef) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("not a base url: {}", self.base_url)))?
            .pop_if_empty()
            .push("pokemon")
            .push(&pokemon.path_segment());
        Ok(url)
    }

    /// Fetch a Pokemon, surfacing the failure cause
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the catalog answers with a
    /// non-success status, or the body is not a Pokemon
    pub async fn try_fetch(&self, pokemon: &PokemonRef) -> Result<Pokemon> {
        let url = self.pokemon_url(pokemon)?;
        tracing::debug!(%url, "fetching pokemon");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Catalog(format!("HTTP error! status: {}", status.as_u16())));
        }

        let body: PokemonResponse = response.json().await?;
        Ok(body.into())
    }

    /// Fetch a Pokemon by number or name
    ///
    /// Returns `None` on any failure after logging the cause.
    pub async fn fetch(&self, pokemon: &PokemonRef) -> Option<Pokemon> {
        match self.try_fetch(pokemon).await {
            Ok(found) => {
                tracing::info!(id = found.id, name = %found.name, "fetched pokemon");
                Some(found)
            }
            Err(e) => {
                tracing::warn!(pokemon = %pokemon, error = %e, "error fetching pokemon");
                None
            }
        }
    }
}
