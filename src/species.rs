//! Taxonomic records from WoRMS
//!
//! `AphiaRecord` mirrors the upstream JSON field names; `SpeciesRecord` is the
//! in-memory shape handed to view models. Field values pass through verbatim:
//! anything missing or `null` upstream stays `None`, and a non-string value
//! keeps its JSON text.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One record as returned by `AphiaRecordsByName` (only the fields we use).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AphiaRecord {
    #[serde(default, deserialize_with = "text_field")]
    pub scientificname: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub authority: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub rank: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub valid_name: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub kingdom: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub phylum: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub class: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub order: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub family: Option<String>,
}

/// Strings pass through as-is, `null` is absent, any other JSON value is
/// kept as its JSON text.
fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Normalized taxonomic record for one species
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpeciesRecord {
    pub scientific_name: Option<String>,
    pub authority: Option<String>,
    pub rank: Option<String>,
    pub status: Option<String>,
    pub valid_name: Option<String>,
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub class_name: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
}

impl From<AphiaRecord> for SpeciesRecord {
    fn from(record: AphiaRecord) -> Self {
        Self {
            scientific_name: record.scientificname,
            authority: record.authority,
            rank: record.rank,
            status: record.status,
            valid_name: record.valid_name,
            kingdom: record.kingdom,
            phylum: record.phylum,
            class_name: record.class,
            order: record.order,
            family: record.family,
        }
    }
}

/// Labelled field for display, present values only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonField<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

impl SpeciesRecord {
    /// Present fields in display order (nomenclature, then kingdom → family).
    pub fn fields(&self) -> Vec<TaxonField<'_>> {
        let all = [
            ("Scientific name", &self.scientific_name),
            ("Authority", &self.authority),
            ("Rank", &self.rank),
            ("Status", &self.status),
            ("Valid name", &self.valid_name),
            ("Kingdom", &self.kingdom),
            ("Phylum", &self.phylum),
            ("Class", &self.class_name),
            ("Order", &self.order),
            ("Family", &self.family),
        ];

        all.into_iter()
            .filter_map(|(label, value)| {
                value.as_deref().map(|value| TaxonField { label, value })
            })
            .collect()
    }
}

/// Decode a raw `AphiaRecordsByName` body into the first record, if any.
///
/// Only element 0 of a sequence (or the single object) is looked at. An empty
/// body (the endpoint answers 204 for no match), `null`, an empty sequence or
/// a first element that is not an object all mean "no record".
pub fn parse_payload(body: &str) -> Result<Option<SpeciesRecord>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let first = match serde_json::from_str::<Value>(body)? {
        Value::Array(records) => records.into_iter().next(),
        other => Some(other),
    };

    match first {
        Some(record @ Value::Object(_)) => {
            Ok(Some(AphiaRecord::deserialize(record)?.into()))
        }
        _ => Ok(None),
    }
}
