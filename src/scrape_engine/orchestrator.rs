//! Top-level run sequencing.
//!
//! Drives the phases in order: browser launch, pagination discovery,
//! listing crawl, then the per-card detail/enrichment/write loop. Strictly
//! sequential on the main page; the only concurrent resource is the scoped
//! enrichment page.

use anyhow::{Context, Result};
use log::{debug, error, info, warn};

use super::enrichment::enrich_record;
use super::listing::collect_listing;
use super::record::visit_card;
use crate::browser_setup::launch_browser;
use crate::config::ScrapeConfig;
use crate::page_driver;
use crate::page_extractor;
use crate::record_sink::CsvSink;

/// Execute a full scrape run.
///
/// # Errors
///
/// Fails only on fatal setup: output file creation, browser launch, or the
/// initial search page load. Per-page and per-card faults are logged and
/// recovered at their own boundary.
pub async fn run(config: ScrapeConfig) -> Result<()> {
    let output_path = config.output_path();
    let mut sink = CsvSink::create(&output_path)
        .with_context(|| format!("Failed to create output file {}", output_path.display()))?;

    let (mut browser, handler_task, chrome_data_dir) =
        launch_browser(config.headless(), config.chrome_data_dir().cloned())
            .await
            .context("Failed to launch browser")?;

    let run_result = run_phases(&browser, &config, &mut sink).await;

    // Graceful teardown on both outcomes; the run result wins.
    if let Err(e) = browser.close().await {
        warn!("Failed to close browser: {e}");
    }
    if let Err(e) = browser.wait().await {
        warn!("Failed to wait for browser exit: {e}");
    }
    handler_task.abort();
    if config.chrome_data_dir().is_none()
        && let Err(e) = std::fs::remove_dir_all(&chrome_data_dir)
    {
        debug!(
            "Failed to remove Chrome data directory {}: {e}",
            chrome_data_dir.display()
        );
    }

    sink.flush().context("Failed to flush output file")?;
    run_result?;

    info!("Done -> {}", output_path.display());
    Ok(())
}

async fn run_phases(
    browser: &chromiumoxide::Browser,
    config: &ScrapeConfig,
    sink: &mut CsvSink,
) -> Result<()> {
    let search_url = config.search_url();
    info!("Opening search results: {search_url}");

    let page = browser
        .new_page("about:blank")
        .await
        .context("Failed to create main page")?;

    page_driver::navigate(&page, &search_url, config.page_load_timeout_secs())
        .await
        .context("Failed to load the search page")?;
    page_driver::pause(config.first_page_settle_ms()).await;

    let page_count = page_extractor::detect_page_count(&page, config).await;
    info!("Result pages detected: {page_count}");

    let listing = collect_listing(&page, config, page_count).await;
    info!("Unique cards discovered: {}", listing.len());

    // Immutable snapshot for the extraction phase.
    let card_urls = listing.into_urls();
    let target = super::types::effective_target(config.record_limit(), card_urls.len());

    let mut written = 0usize;
    for url in &card_urls {
        if written >= target {
            break;
        }

        let mut record = match visit_card(&page, url, config).await {
            Ok(record) => record,
            Err(e) => {
                error!("Card visit failed for {url}: {e:#}");
                continue;
            }
        };

        enrich_record(browser, &mut record, config).await;

        sink.write_record(&record)
            .with_context(|| format!("Failed to write record for {url}"))?;
        written += 1;
        info!("Collected {written}/{target}");
    }

    Ok(())
}
