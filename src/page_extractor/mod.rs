//! Page data extraction functions.
//!
//! Pagination detection, card-link collection and the typed field
//! extractors for detail and enrichment pages. All DOM access happens in
//! the scripts of [`js_scripts`]; this module evaluates them through the
//! page driver and returns [`schema`] values.

pub mod js_scripts;
pub mod schema;
pub mod stabilize;

pub use schema::{CardDetails, SiteContacts};
pub use stabilize::stabilize_content;

use anyhow::Result;
use chromiumoxide::Page;
use log::warn;

use crate::config::ScrapeConfig;
use crate::page_driver;

/// Detect how many result pages the current query has.
///
/// Stabilizes the loaded first page, then takes the maximum of the two
/// pagination signals (link targets and numeric control captions). The
/// detection is a heuristic and may under-count on unseen markup variants;
/// a failed evaluation degrades to a single page rather than an error.
pub async fn detect_page_count(page: &Page, config: &ScrapeConfig) -> u32 {
    stabilize_content(page, config).await;

    match page_driver::evaluate::<u32>(page, js_scripts::PAGE_COUNT_SCRIPT).await {
        Ok(count) => count.max(1),
        Err(e) => {
            warn!("Pagination detection failed, assuming a single page: {e:#}");
            1
        }
    }
}

/// Collect the unique card detail links present on the current page.
pub async fn collect_card_links(page: &Page) -> Result<Vec<String>> {
    page_driver::evaluate::<Vec<String>>(page, js_scripts::CARD_LINKS_SCRIPT).await
}

/// Best-effort activation of the "show phone" control.
///
/// Returns `true` when a matching control was found and clicked; the caller
/// then waits for the revealed content to render. Absence of a match is not
/// an error.
pub async fn reveal_hidden_phone(page: &Page) -> Result<bool> {
    page_driver::evaluate::<bool>(page, js_scripts::REVEAL_PHONE_SCRIPT).await
}

/// Extract the structured contact fields of the loaded detail page.
pub async fn extract_card_details(page: &Page) -> Result<CardDetails> {
    page_driver::evaluate::<CardDetails>(page, js_scripts::CARD_DETAILS_SCRIPT).await
}

/// Harvest supplementary contact handles from a loaded enrichment page.
pub async fn extract_site_contacts(page: &Page) -> Result<SiteContacts> {
    page_driver::evaluate::<SiteContacts>(page, js_scripts::SITE_CONTACTS_SCRIPT).await
}
