//! Typed result shapes for in-page extraction scripts.
//!
//! These are the only structures the untyped evaluation results are allowed
//! to land in; every field is optional or defaultable so a sparse page
//! deserializes into an empty-field value instead of an error.

use serde::{Deserialize, Serialize};

/// Structured fields extracted from a card detail page.
///
/// Every collection may be empty and `website` may be absent; a missing
/// field is data, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub telegram: Vec<String>,
}

/// Contact handles harvested from an entity's own website during enrichment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContacts {
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub telegram: Vec<String>,
}
