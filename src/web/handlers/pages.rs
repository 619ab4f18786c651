// Page templates for HTML rendering with Askama

use askama::Template;

use crate::species::TaxonField;
use crate::view_models::{HomePage, ZonePage};
use crate::zones::Zone;

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub page: &'a HomePage,
    pub nav: &'static [Zone],
}

impl<'a> HomeTemplate<'a> {
    pub fn new(page: &'a HomePage) -> Self {
        Self { page, nav: &Zone::ALL }
    }
}

// ============================================================================
// Zone Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/zone.html")]
pub struct ZoneTemplate<'a> {
    pub page: &'a ZonePage,
    pub nav: &'static [Zone],
    /// Present taxonomy fields; `None` hides the whole section
    pub taxonomy: Option<Vec<TaxonField<'a>>>,
}

impl<'a> ZoneTemplate<'a> {
    pub fn new(page: &'a ZonePage) -> Self {
        Self {
            page,
            nav: &Zone::ALL,
            taxonomy: page.species.as_ref().map(|species| species.fields()),
        }
    }
}
