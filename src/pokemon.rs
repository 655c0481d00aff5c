//! Pokemon record types and display formatting

use std::fmt;

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// A Pokemon record as kept by the server
///
/// Only the five fields below are retained from the catalog response.
/// Height and weight are in tenths of a metre and tenths of a kilogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub height: u32,
    pub weight: u32,
}

/// One type slot of a Pokemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    /// Display order, lowest first
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Named reference to another catalog resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl PokemonType {
    /// Build a type tag with an empty resource URL
    #[must_use]
    pub fn new(slot: u32, name: impl Into<String>) -> Self {
        Self {
            slot,
            kind: NamedResource {
                name: name.into(),
                url: String::new(),
            },
        }
    }

    /// Type name, e.g. "electric"
    #[must_use]
    pub fn name(&self) -> &str {
        &self.kind.name
    }
}

/// A Pokemon identifier: national dex number or name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
#[serde(untagged)]
pub enum PokemonRef {
    /// Pokemon number (e.g. 25 for Pikachu)
    Number(u64),
    /// Pokemon name (e.g. "pikachu", "charizard")
    Name(String),
}

impl PokemonRef {
    /// Check the identifier before it reaches the network
    ///
    /// # Errors
    ///
    /// Returns a message if the number is zero or the name is blank
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Number(0) => Err("Pokemon number must be a positive integer".to_string()),
            Self::Name(name) if name.trim().is_empty() => {
                Err("Pokemon name must not be empty".to_string())
            }
            _ => Ok(()),
        }
    }

    /// Path segment used for the catalog lookup
    #[must_use]
    pub fn path_segment(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Name(name) => name.trim().to_lowercase(),
        }
    }
}

impl fmt::Display for PokemonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<u64> for PokemonRef {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for PokemonRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Join type names with ", " in ascending slot order
///
/// The sort is stable, so duplicate slots keep their input order.
#[must_use]
pub fn format_types(types: &[PokemonType]) -> String {
    let mut sorted: Vec<&PokemonType> = types.iter().collect();
    sorted.sort_by_key(|t| t.slot);
    sorted
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convert a tenths value to whole units (4 -> 0.4, 60 -> 6)
#[must_use]
pub fn tenths(value: u32) -> f64 {
    f64::from(value) / 10.0
}
