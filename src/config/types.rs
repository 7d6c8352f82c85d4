//! Core configuration type and shared constants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default city slug when the CLI argument is omitted.
pub const DEFAULT_CITY_SLUG: &str = "spb";

/// Default search query when the CLI argument is omitted.
pub const DEFAULT_QUERY: &str = "ритуальные услуги";

/// Chrome user agent presented to the directory and to enrichment sites.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Viewport matching a common desktop layout; the directory serves a
/// different (and harder to scrape) markup to narrow viewports.
pub const VIEWPORT_WIDTH: u32 = 1366;
pub const VIEWPORT_HEIGHT: u32 = 900;

/// Navigation timeout for listing and detail pages.
pub const DEFAULT_PAGE_LOAD_TIMEOUT_SECS: u64 = 60;

/// Navigation timeout for enrichment fetches. Shorter than detail pages:
/// enrichment is best-effort and a slow external site must not stall the run.
pub const DEFAULT_ENRICHMENT_TIMEOUT_SECS: u64 = 20;

/// Upper bound on a single scroll-stabilization loop.
pub const DEFAULT_SCROLL_BUDGET_MS: u64 = 45_000;

/// Pause between scroll steps, long enough for lazy content to request.
pub const DEFAULT_SCROLL_PAUSE_MS: u64 = 600;

/// Configuration for one scrape run.
///
/// Construct via [`ScrapeConfig::builder`]; every field has a default so a
/// bare `builder().build()` yields the stock run against the default city
/// and query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// City slug as used in the directory's URL space (`spb`, `moscow`, ...).
    pub(crate) city_slug: String,
    /// Search query, URL-encoded into the search path.
    pub(crate) query: String,
    /// Maximum number of records to emit. `None` = all discovered cards.
    pub(crate) record_limit: Option<usize>,
    /// Directory the output CSV is written into.
    pub(crate) output_dir: PathBuf,
    pub(crate) headless: bool,
    /// Optional dedicated Chrome profile directory. `None` = per-process
    /// temp directory, removed on cleanup.
    pub(crate) chrome_data_dir: Option<PathBuf>,
    pub(crate) page_load_timeout_secs: u64,
    pub(crate) enrichment_timeout_secs: u64,
    pub(crate) scroll_budget_ms: u64,
    pub(crate) scroll_pause_ms: u64,
    /// Settle delay after the initial search page load.
    pub(crate) first_page_settle_ms: u64,
    /// Settle delay after each listing page navigation.
    pub(crate) listing_settle_ms: u64,
    /// Settle delay after each detail page navigation.
    pub(crate) card_settle_ms: u64,
    /// Settle delay after clicking the phone-reveal control.
    pub(crate) reveal_settle_ms: u64,
    /// Settle delay after an enrichment page load.
    pub(crate) enrichment_settle_ms: u64,
}
