//! Listing crawl: pages 1..N with URL fallback and identity dedup.

use chromiumoxide::Page;
use log::{info, warn};

use crate::card_index::{ListingIndex, canonicalize_url, extract_card_id};
use crate::config::ScrapeConfig;
use crate::page_driver;
use crate::page_extractor;

/// Primary and fallback URL forms for result page `p`.
///
/// Page 1 is the bare search URL; later pages append `/page/{p}`. The
/// fallback is the query-parameter form the directory also serves.
#[must_use]
pub fn page_urls(search_url: &str, page_number: u32) -> (String, String) {
    let primary = if page_number == 1 {
        search_url.to_string()
    } else {
        format!("{search_url}/page/{page_number}")
    };
    let fallback = format!("{search_url}?page={page_number}");
    (primary, fallback)
}

/// Navigate to result page `p`, trying the primary URL form first and the
/// fallback form on failure. Returns `false` when neither loads; a single
/// unavailable page must not abort the crawl.
async fn open_listing_page(page: &Page, config: &ScrapeConfig, page_number: u32) -> bool {
    let (primary, fallback) = page_urls(&config.search_url(), page_number);
    let timeout = config.page_load_timeout_secs();

    if let Err(primary_err) = page_driver::navigate(page, &primary, timeout).await {
        warn!("Page {page_number}: primary URL failed ({primary_err:#}), trying fallback");
        if let Err(fallback_err) = page_driver::navigate(page, &fallback, timeout).await {
            warn!("Page {page_number}: fallback URL failed ({fallback_err:#}), skipping page");
            return false;
        }
    }
    true
}

/// Crawl result pages 1..=`page_count`, deduplicating discovered card links
/// into an ordered first-seen index.
///
/// The returned index is the complete listing-phase output; the caller
/// receives it as a value and the extraction phase works from a snapshot of
/// its URLs.
pub async fn collect_listing(
    page: &Page,
    config: &ScrapeConfig,
    page_count: u32,
) -> ListingIndex {
    let mut index = ListingIndex::new();

    for page_number in 1..=page_count {
        if !open_listing_page(page, config, page_number).await {
            continue;
        }

        page_driver::pause(config.listing_settle_ms()).await;
        page_extractor::stabilize_content(page, config).await;

        let links = match page_extractor::collect_card_links(page).await {
            Ok(links) => links,
            Err(e) => {
                warn!("Page {page_number}: card link collection failed: {e:#}");
                Vec::new()
            }
        };

        let mut added_here = 0usize;
        for link in &links {
            let Some(id) = extract_card_id(link) else {
                continue;
            };
            if index.insert(id, canonicalize_url(link)) {
                added_here += 1;
            }
        }

        info!(
            "Page {page_number}/{page_count}: {} links found, {added_here} new cards",
            links.len()
        );
    }

    index
}
