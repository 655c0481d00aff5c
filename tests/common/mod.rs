//! Shared test utilities

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pokemon_mcp::{Pokemon, PokemonType, UrlOpener};

/// The record the mocked catalog serves for #25
#[must_use]
pub fn pikachu() -> Pokemon {
    Pokemon {
        id: 25,
        name: "pikachu".to_string(),
        types: vec![PokemonType {
            slot: 1,
            kind: pokemon_mcp::pokemon::NamedResource {
                name: "electric".to_string(),
                url: "https://pokeapi.co/api/v2/type/13/".to_string(),
            },
        }],
        height: 4,
        weight: 60,
    }
}

/// Catalog payload for pikachu, including fields the server must drop
#[must_use]
pub fn pikachu_body() -> serde_json::Value {
    serde_json::json!({
        "id": 25,
        "name": "pikachu",
        "base_experience": 112,
        "order": 35,
        "is_default": true,
        "abilities": [
            {
                "ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"},
                "is_hidden": false,
                "slot": 1
            }
        ],
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
        ],
        "height": 4,
        "weight": 60,
        "sprites": {"front_default": "https://example.invalid/25.png"}
    })
}

/// Catalog payload for bulbasaur with out-of-order type slots
#[must_use]
pub fn bulbasaur_body() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "bulbasaur",
        "types": [
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}},
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}}
        ],
        "height": 7,
        "weight": 69
    })
}

/// URL opener that remembers what it was asked to open
#[derive(Debug, Default, Clone)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingOpener {
    /// Opener whose every launch fails
    #[must_use]
    pub fn failing() -> Self {
        Self {
            opened: Arc::default(),
            fail: true,
        }
    }

    /// URLs opened so far
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlOpener for RecordingOpener {
    async fn open(&self, url: &str) -> pokemon_mcp::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(pokemon_mcp::Error::Browser("no display".to_string()));
        }
        Ok(())
    }
}
