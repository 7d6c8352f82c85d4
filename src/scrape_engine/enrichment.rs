//! Website enrichment: best-effort harvest of extra contact handles.

use anyhow::Result;
use chromiumoxide::{Browser, Page};
use log::{debug, warn};

use super::types::Record;
use crate::config::ScrapeConfig;
use crate::page_driver;
use crate::page_extractor::{self, SiteContacts};

/// Fetch the entity's own website and union any mail/telegram handles into
/// the record.
///
/// Runs in its own page, opened right before the fetch and closed on every
/// exit path, never shared across records. Every failure in here is
/// swallowed: the record keeps whatever the detail page already yielded.
pub async fn enrich_record(browser: &Browser, record: &mut Record, config: &ScrapeConfig) {
    let Some(website) = record.website.clone() else {
        return;
    };

    let page = match browser.new_page("about:blank").await {
        Ok(page) => page,
        Err(e) => {
            warn!("Enrichment page creation failed for {website}: {e}");
            return;
        }
    };

    let contacts = fetch_site_contacts(&page, &website, config).await;

    // Release the isolated page regardless of how the fetch went.
    if let Err(e) = page.close().await {
        debug!("Enrichment page close failed for {website}: {e}");
    }

    match contacts {
        Ok(contacts) => record.merge_site_contacts(contacts),
        Err(e) => warn!("Enrichment skipped for {website}: {e:#}"),
    }
}

async fn fetch_site_contacts(
    page: &Page,
    website: &str,
    config: &ScrapeConfig,
) -> Result<SiteContacts> {
    page_driver::navigate(page, website, config.enrichment_timeout_secs()).await?;
    page_driver::pause(config.enrichment_settle_ms()).await;
    page_extractor::extract_site_contacts(page).await
}
