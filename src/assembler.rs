//! Page Assembler
//!
//! Builds the view model for one zone request: WoRMS lookup, a fresh display
//! name, and the zone's static copy. Has no failure path of its own since the
//! lookup client already absorbs upstream errors.

use crate::lookup::WormsClient;
use crate::names::generate_name;
use crate::view_models::ZonePage;
use crate::zones::Zone;

pub struct PageAssembler {
    client: WormsClient,
}

impl PageAssembler {
    pub fn new(client: WormsClient) -> Self {
        Self { client }
    }

    /// Assemble the page for `zone`. Always succeeds; `species` is `None`
    /// when the lookup yields nothing.
    pub async fn assemble(&self, zone: Zone) -> ZonePage {
        let scientific_name = zone.scientific_name();
        tracing::debug!("Assembling {} page ({})", zone, scientific_name);

        let species = self.client.lookup(scientific_name).await;
        let display_name = generate_name();

        ZonePage::new(zone, species, display_name)
    }
}
