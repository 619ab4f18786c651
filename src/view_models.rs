//! View Models
//!
//! Per-request data handed to the templates. Also served as JSON by the
//! zone API endpoint.

use serde::Serialize;

use crate::species::SpeciesRecord;
use crate::zones::Zone;

/// Everything a zone page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZonePage {
    pub zone: Zone,
    pub title: String,
    /// `None` when the lookup found nothing or the upstream was unreachable
    pub species: Option<SpeciesRecord>,
    /// Random per request
    pub display_name: String,
    pub common_name: String,
    pub description: String,
    pub image: String,
}

impl ZonePage {
    /// Merge a lookup result and a display name with the zone's static copy.
    pub fn new(zone: Zone, species: Option<SpeciesRecord>, display_name: String) -> Self {
        let copy = zone.copy();
        Self {
            zone,
            title: copy.title.to_string(),
            species,
            display_name,
            common_name: copy.common_name.to_string(),
            description: copy.description.to_string(),
            image: copy.image.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub title: String,
    pub zones: Vec<ZoneLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneLink {
    pub path: &'static str,
    pub title: &'static str,
    pub common_name: &'static str,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            title: "Home".to_string(),
            zones: Zone::ALL
                .into_iter()
                .map(|zone| ZoneLink {
                    path: zone.path(),
                    title: zone.title(),
                    common_name: zone.copy().common_name,
                })
                .collect(),
        }
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}
