pub mod browser_setup;
pub mod card_index;
pub mod config;
pub mod page_driver;
pub mod page_extractor;
pub mod record_sink;
pub mod scrape_engine;

pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use card_index::{CardIdentifier, CardKind, ListingIndex, canonicalize_url, extract_card_id};
pub use config::ScrapeConfig;
pub use page_extractor::schema::{CardDetails, SiteContacts};
pub use record_sink::{CSV_HEADER, CsvSink, csv_row, escape_field};
pub use scrape_engine::{Record, ScrapeError, ScrapeResult};

/// Run a full scrape with the given configuration.
pub async fn scrape(config: ScrapeConfig) -> Result<(), ScrapeError> {
    scrape_engine::orchestrator::run(config)
        .await
        .map_err(ScrapeError::from)
}
