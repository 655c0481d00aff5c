//! Pokemon MCP server
//!
//! Exposes two MCP tools over stdio (`fetch-pokemon`, `get-current-pokemon`)
//! and a local web page showing the most recently fetched Pokemon.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   stdio    ┌──────────────────────────────┐
//! │  MCP client  │ ─────────▶ │ tools (fetch / get current)  │
//! └──────────────┘            └───────┬──────────────┬───────┘
//!                                     │              │
//!                         ┌───────────▼───┐   ┌──────▼───────┐
//!                         │ catalog (GET) │   │    store     │
//!                         └───────────────┘   └──────▲───────┘
//!                                                    │
//! ┌──────────────┐   poll /api/pokemon   ┌───────────┴───────┐
//! │   browser    │ ────────────────────▶ │  api (web server) │
//! └──────────────┘                       └───────────────────┘
//! ```

pub mod api;
pub mod browser;
pub mod catalog;
pub mod config;
pub mod daemon;
pub mod error;
pub mod pokemon;
pub mod store;
pub mod tools;

pub use browser::{NoBrowser, SystemBrowser, UrlOpener};
pub use catalog::CatalogClient;
pub use config::Config;
pub use daemon::Daemon;
pub use error::{Error, Result};
pub use pokemon::{Pokemon, PokemonRef, PokemonType, format_types};
pub use store::PokemonStore;
pub use tools::PokemonTools;
