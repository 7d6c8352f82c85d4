//! Core types for the scrape run: the error taxonomy, the output record and
//! the set-union contact merge.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::page_extractor::schema::{CardDetails, SiteContacts};

/// Top-level error type for a scrape run.
///
/// Per-page and per-record faults are handled inside the engine and never
/// surface here; only fatal setup failures (output stream, browser start,
/// initial search load) terminate a run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Browser error: {0}")]
    Browser(String),
    #[error("Output error: {0}")]
    Output(String),
    #[error("Scrape error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for ScrapeError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} preserves the full context chain
        Self::Other(format!("{err:#}"))
    }
}

/// Convenience alias for results carrying a [`ScrapeError`].
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// One finished card: created by the detail extraction, enriched at most
/// once from the entity's own website, then written and never revisited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub address: String,
    pub phones: Vec<String>,
    pub website: Option<String>,
    pub email: Vec<String>,
    pub telegram: Vec<String>,
    /// Canonical detail URL the record was extracted from.
    pub source_url: String,
}

impl Record {
    /// Build a record from the detail-page extraction result.
    ///
    /// Collections are deduplicated on entry; an all-empty `details` still
    /// yields a record, since a missing field is data.
    #[must_use]
    pub fn from_details(details: CardDetails, source_url: impl Into<String>) -> Self {
        let mut record = Self {
            name: details.name,
            address: details.address,
            phones: Vec::new(),
            website: details.website.filter(|w| !w.is_empty()),
            email: Vec::new(),
            telegram: Vec::new(),
            source_url: source_url.into(),
        };
        merge_unique(&mut record.phones, details.phones);
        merge_unique(&mut record.email, details.email);
        merge_unique(&mut record.telegram, details.telegram);
        record
    }

    /// Union contact handles harvested from the entity's website into the
    /// record. Applying the same contacts twice adds nothing.
    pub fn merge_site_contacts(&mut self, contacts: SiteContacts) {
        merge_unique(&mut self.email, contacts.email);
        merge_unique(&mut self.telegram, contacts.telegram);
    }
}

/// Number of records a run should emit given the configured limit and the
/// count of discovered cards.
#[must_use]
pub fn effective_target(record_limit: Option<usize>, discovered: usize) -> usize {
    match record_limit {
        Some(limit) => limit.min(discovered),
        None => discovered,
    }
}

/// Append values not already present, preserving first-seen order and
/// skipping empty strings.
pub fn merge_unique(existing: &mut Vec<String>, incoming: impl IntoIterator<Item = String>) {
    for value in incoming {
        if value.is_empty() || existing.contains(&value) {
            continue;
        }
        existing.push(value);
    }
}
