//! WoRMS Species Lookup Client
//!
//! Queries `AphiaRecordsByName` for an exact, marine-only match and returns
//! the first record. Every failure (transport, non-success status, body that
//! does not decode) is logged and collapsed into `None`, so callers cannot
//! tell "upstream down" from "no match". Pages stay renderable offline.
//!
//! One request per lookup: no retries, no caching, transport-default timeouts.

use crate::species::{parse_payload, SpeciesRecord};

pub const DEFAULT_WORMS_BASE_URL: &str = "https://www.marinespecies.org/rest";

/// Why a lookup produced no record. `lookup` logs and discards it,
/// `try_lookup` returns it.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("scientific name is empty")]
    EmptyName,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the WoRMS REST API
#[derive(Debug, Clone)]
pub struct WormsClient {
    http: reqwest::Client,
    base_url: String,
}

impl WormsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ocean_zones/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for a name: percent-encoded path segment plus the fixed
    /// exact-match and marine-only flags.
    pub fn records_url(&self, scientific_name: &str) -> String {
        format!(
            "{}/AphiaRecordsByName/{}?like=false&marine_only=true",
            self.base_url,
            urlencoding::encode(scientific_name)
        )
    }

    /// Look up a species, absorbing every failure into `None`.
    pub async fn lookup(&self, scientific_name: &str) -> Option<SpeciesRecord> {
        match self.try_lookup(scientific_name).await {
            Ok(record) => {
                if record.is_none() {
                    tracing::info!("No WoRMS record for '{}'", scientific_name);
                }
                record
            }
            Err(e) => {
                tracing::warn!("Error fetching WoRMS species '{}': {}", scientific_name, e);
                None
            }
        }
    }

    /// Look up a species, reporting why nothing came back.
    pub async fn try_lookup(
        &self,
        scientific_name: &str,
    ) -> Result<Option<SpeciesRecord>, LookupError> {
        if scientific_name.trim().is_empty() {
            return Err(LookupError::EmptyName);
        }

        let url = self.records_url(scientific_name);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.text().await?;
        tracing::debug!("Raw WoRMS data for '{}': {}", scientific_name, body);

        Ok(parse_payload(&body)?)
    }
}
