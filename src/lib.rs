//! Ocean Zones
//!
//! Educational site with one page per ocean depth zone, each enriched with
//! live taxonomy from the World Register of Marine Species (WoRMS).
//!
//! Layout:
//! - `zones`: the fixed zone registry (scientific names + page copy)
//! - `species`: WoRMS record decoding
//! - `lookup`: WoRMS HTTP client, failures collapse to "no record"
//! - `names`: random display names
//! - `view_models` / `assembler`: per-request page data
//! - `web` / `api_server`: askama templates and the axum router (`api` feature)

pub mod assembler;
pub mod config;
pub mod lookup;
pub mod names;
pub mod species;
pub mod view_models;
pub mod zones;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use assembler::PageAssembler;
pub use config::ServerConfig;
pub use lookup::{LookupError, WormsClient};
pub use species::SpeciesRecord;
pub use view_models::{HomePage, ZonePage};
pub use zones::Zone;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
