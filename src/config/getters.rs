//! Accessor methods for [`ScrapeConfig`], plus the derived URL and output
//! path for a run.

use std::path::PathBuf;

use super::types::ScrapeConfig;

impl ScrapeConfig {
    #[must_use]
    pub fn city_slug(&self) -> &str {
        &self.city_slug
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn record_limit(&self) -> Option<usize> {
        self.record_limit
    }

    #[must_use]
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }

    #[must_use]
    pub fn page_load_timeout_secs(&self) -> u64 {
        self.page_load_timeout_secs
    }

    #[must_use]
    pub fn enrichment_timeout_secs(&self) -> u64 {
        self.enrichment_timeout_secs
    }

    #[must_use]
    pub fn scroll_budget_ms(&self) -> u64 {
        self.scroll_budget_ms
    }

    #[must_use]
    pub fn scroll_pause_ms(&self) -> u64 {
        self.scroll_pause_ms
    }

    #[must_use]
    pub fn first_page_settle_ms(&self) -> u64 {
        self.first_page_settle_ms
    }

    #[must_use]
    pub fn listing_settle_ms(&self) -> u64 {
        self.listing_settle_ms
    }

    #[must_use]
    pub fn card_settle_ms(&self) -> u64 {
        self.card_settle_ms
    }

    #[must_use]
    pub fn reveal_settle_ms(&self) -> u64 {
        self.reveal_settle_ms
    }

    #[must_use]
    pub fn enrichment_settle_ms(&self) -> u64 {
        self.enrichment_settle_ms
    }

    /// The directory search URL for this city and query.
    #[must_use]
    pub fn search_url(&self) -> String {
        format!(
            "https://2gis.ru/{}/search/{}",
            self.city_slug,
            urlencoding::encode(&self.query)
        )
    }

    /// Output CSV path: `out_<city>.csv` inside the output directory.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("out_{}.csv", self.city_slug))
    }
}
