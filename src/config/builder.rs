//! Builder for [`ScrapeConfig`] with validation and sensible defaults.

use anyhow::{Result, anyhow};
use std::path::PathBuf;

use super::types::{
    DEFAULT_CITY_SLUG, DEFAULT_ENRICHMENT_TIMEOUT_SECS, DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
    DEFAULT_QUERY, DEFAULT_SCROLL_BUDGET_MS, DEFAULT_SCROLL_PAUSE_MS, ScrapeConfig,
};

pub struct ScrapeConfigBuilder {
    city_slug: String,
    query: String,
    record_limit: Option<usize>,
    output_dir: PathBuf,
    headless: bool,
    chrome_data_dir: Option<PathBuf>,
    page_load_timeout_secs: u64,
    enrichment_timeout_secs: u64,
    scroll_budget_ms: u64,
    scroll_pause_ms: u64,
    first_page_settle_ms: u64,
    listing_settle_ms: u64,
    card_settle_ms: u64,
    reveal_settle_ms: u64,
    enrichment_settle_ms: u64,
}

impl Default for ScrapeConfigBuilder {
    fn default() -> Self {
        Self {
            city_slug: DEFAULT_CITY_SLUG.to_string(),
            query: DEFAULT_QUERY.to_string(),
            record_limit: None,
            output_dir: PathBuf::from("."),
            headless: true,
            chrome_data_dir: None,
            page_load_timeout_secs: DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
            enrichment_timeout_secs: DEFAULT_ENRICHMENT_TIMEOUT_SECS,
            scroll_budget_ms: DEFAULT_SCROLL_BUDGET_MS,
            scroll_pause_ms: DEFAULT_SCROLL_PAUSE_MS,
            first_page_settle_ms: 1_500,
            listing_settle_ms: 900,
            card_settle_ms: 1_000,
            reveal_settle_ms: 700,
            enrichment_settle_ms: 800,
        }
    }
}

impl ScrapeConfigBuilder {
    #[must_use]
    pub fn city_slug(mut self, slug: impl Into<String>) -> Self {
        self.city_slug = slug.into();
        self
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Record limit; `None` or `Some(0)` means unbounded.
    #[must_use]
    pub fn record_limit(mut self, limit: Option<usize>) -> Self {
        self.record_limit = limit;
        self
    }

    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn chrome_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.chrome_data_dir = dir;
        self
    }

    #[must_use]
    pub fn page_load_timeout_secs(mut self, secs: u64) -> Self {
        self.page_load_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn enrichment_timeout_secs(mut self, secs: u64) -> Self {
        self.enrichment_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn scroll_budget_ms(mut self, ms: u64) -> Self {
        self.scroll_budget_ms = ms;
        self
    }

    #[must_use]
    pub fn scroll_pause_ms(mut self, ms: u64) -> Self {
        self.scroll_pause_ms = ms;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the city slug is empty or contains characters
    /// that cannot appear in the directory's URL path, or when the query is
    /// empty.
    pub fn build(self) -> Result<ScrapeConfig> {
        let city_slug = self.city_slug.trim().to_string();
        if city_slug.is_empty() {
            return Err(anyhow!("city slug must not be empty"));
        }
        if !city_slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(anyhow!(
                "city slug '{city_slug}' contains characters not valid in a directory path segment"
            ));
        }

        let query = self.query.trim().to_string();
        if query.is_empty() {
            return Err(anyhow!("search query must not be empty"));
        }

        // The original CLI convention: a limit of 0 means "no limit".
        let record_limit = self.record_limit.filter(|limit| *limit > 0);

        Ok(ScrapeConfig {
            city_slug,
            query,
            record_limit,
            output_dir: self.output_dir,
            headless: self.headless,
            chrome_data_dir: self.chrome_data_dir,
            page_load_timeout_secs: self.page_load_timeout_secs,
            enrichment_timeout_secs: self.enrichment_timeout_secs,
            scroll_budget_ms: self.scroll_budget_ms,
            scroll_pause_ms: self.scroll_pause_ms,
            first_page_settle_ms: self.first_page_settle_ms,
            listing_settle_ms: self.listing_settle_ms,
            card_settle_ms: self.card_settle_ms,
            reveal_settle_ms: self.reveal_settle_ms,
            enrichment_settle_ms: self.enrichment_settle_ms,
        })
    }
}

impl ScrapeConfig {
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::default()
    }
}
