//! Scroll-driven content stabilization.
//!
//! The directory renders listing entries lazily as the viewport approaches
//! them. Stabilization scrolls downward in steps until the measured content
//! height stops growing or the time budget runs out, at which point the
//! lazily-rendered content is present in the document.

use chromiumoxide::Page;
use log::warn;
use std::time::{Duration, Instant};

use crate::config::ScrapeConfig;
use crate::page_driver;

/// Force lazily-rendered content to materialize.
///
/// Never fails: a measurement or scroll error means the page is treated as
/// under-loaded and extraction proceeds with whatever content is present.
pub async fn stabilize_content(page: &Page, config: &ScrapeConfig) {
    let budget = Duration::from_millis(config.scroll_budget_ms());
    let start = Instant::now();

    let mut last_height = match page_driver::content_height(page).await {
        Ok(height) => height,
        Err(e) => {
            warn!("Content height measurement failed, proceeding under-loaded: {e:#}");
            return;
        }
    };

    while start.elapsed() < budget {
        if let Err(e) = page_driver::scroll_step(page).await {
            warn!("Scroll step failed, proceeding under-loaded: {e:#}");
            return;
        }
        page_driver::pause(config.scroll_pause_ms()).await;

        let new_height = match page_driver::content_height(page).await {
            Ok(height) => height,
            Err(e) => {
                warn!("Content height measurement failed, proceeding under-loaded: {e:#}");
                return;
            }
        };

        // Height plateau between two consecutive measurements = stable.
        if (new_height - last_height).abs() < f64::EPSILON {
            break;
        }
        last_height = new_height;
    }
}
