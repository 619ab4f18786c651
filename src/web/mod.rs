//! HTML rendering for the site pages

pub mod handlers;

pub use handlers::pages::{HomeTemplate, ZoneTemplate};
