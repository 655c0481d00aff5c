//! Text blocks returned by the MCP tools

use crate::pokemon::{Pokemon, PokemonRef, format_types, tenths};

/// Reply for `get-current-pokemon` when nothing has been fetched
pub const NOTHING_LOADED: &str =
    "No Pokemon is currently loaded. Use fetch-pokemon to load a Pokemon first.";

/// Shown in place of the URL while the web server is still binding
pub const SERVER_STARTING: &str = "HTTP server starting...";

/// Reply for a failed catalog lookup
#[must_use]
pub fn fetch_failed(pokemon: &PokemonRef) -> String {
    format!(
        "Failed to fetch Pokemon: {pokemon}. Please check if the Pokemon name or number is valid."
    )
}

/// Reply for a successful `fetch-pokemon`
#[must_use]
pub fn fetched(pokemon: &Pokemon, url: Option<&str>) -> String {
    let location = url.map_or_else(
        || SERVER_STARTING.to_string(),
        |url| format!("Browser opening to {url}"),
    );

    [
        format!("Successfully fetched Pokemon #{}: {}", pokemon.id, pokemon.name),
        details(pokemon),
        String::new(),
        location,
    ]
    .join("\n")
}

/// Reply for `get-current-pokemon`
#[must_use]
pub fn current(pokemon: &Pokemon, url: Option<&str>) -> String {
    let location = url.map_or_else(|| SERVER_STARTING.to_string(), |url| format!("View at: {url}"));

    [
        format!("Current Pokemon: #{} {}", pokemon.id, pokemon.name),
        details(pokemon),
        location,
    ]
    .join("\n")
}

/// Type, height and weight lines
fn details(pokemon: &Pokemon) -> String {
    format!(
        "Type(s): {}\nHeight: {}m\nWeight: {}kg",
        format_types(&pokemon.types),
        tenths(pokemon.height),
        tenths(pokemon.weight),
    )
}
