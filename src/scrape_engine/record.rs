//! Detail-page visit: navigation, phone reveal and field extraction.

use anyhow::Result;
use chromiumoxide::Page;
use log::{debug, warn};

use super::types::Record;
use crate::config::ScrapeConfig;
use crate::page_driver;
use crate::page_extractor::{self, CardDetails};

/// Visit one card detail page and extract its record.
///
/// Navigation failure is the only error path: the caller skips the card and
/// no record is produced. An extraction fault degrades to an empty-field
/// record instead, and the reveal click is best effort throughout.
pub async fn visit_card(page: &Page, url: &str, config: &ScrapeConfig) -> Result<Record> {
    page_driver::navigate(page, url, config.page_load_timeout_secs()).await?;
    page_driver::pause(config.card_settle_ms()).await;

    // Contacts may be hidden behind a "show phone" button.
    match page_extractor::reveal_hidden_phone(page).await {
        Ok(true) => page_driver::pause(config.reveal_settle_ms()).await,
        Ok(false) => {}
        Err(e) => debug!("Phone reveal attempt failed on {url}: {e:#}"),
    }

    let details = match page_extractor::extract_card_details(page).await {
        Ok(details) => details,
        Err(e) => {
            warn!("Field extraction failed on {url}, emitting empty record: {e:#}");
            CardDetails::default()
        }
    };

    Ok(Record::from_details(details, url))
}
