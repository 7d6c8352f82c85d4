//! Scrape Engine Module
//!
//! The crawl/dedupe/extract pipeline: pagination-aware listing crawl,
//! per-card detail extraction with the phone-reveal step, best-effort
//! website enrichment, and the orchestrator sequencing them.

pub mod enrichment;
pub mod listing;
pub mod orchestrator;
pub mod record;
pub mod types;

pub use enrichment::enrich_record;
pub use listing::{collect_listing, page_urls};
pub use orchestrator::run;
pub use record::visit_card;
pub use types::{Record, ScrapeError, ScrapeResult, effective_target, merge_unique};
