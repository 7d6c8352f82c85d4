//! Narrow contract over the headless browsing engine.
//!
//! Every interaction with a rendered page goes through this module: timed
//! navigation, typed script evaluation, viewport scrolling and content
//! height measurement. Untyped page content is touched only here; evaluation
//! results are deserialized into the typed extraction schema immediately.

use anyhow::{Context, Result, anyhow};
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Fraction of the viewport height advanced per stabilization scroll step.
const SCROLL_STEP_SCRIPT: &str = "window.scrollBy(0, window.innerHeight * 0.9)";

const CONTENT_HEIGHT_SCRIPT: &str = "document.body.scrollHeight";

/// Wrap an async page operation with an explicit timeout.
///
/// Prevents indefinite hangs on navigation and evaluation. The error message
/// distinguishes a timeout from an operation failure.
pub async fn with_page_timeout<F, T>(
    operation: F,
    timeout_secs: u64,
    operation_name: &str,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow!(
            "{operation_name} timeout after {timeout_secs} seconds"
        )),
    }
}

/// Navigate the page to `url`, bounded by `timeout_secs`.
///
/// Resolves once the navigation commits; content settling is the caller's
/// concern (see [`pause`] and the stabilizer).
pub async fn navigate(page: &Page, url: &str, timeout_secs: u64) -> Result<()> {
    with_page_timeout(
        async {
            page.goto(url)
                .await
                .map_err(|e| anyhow!("navigation to {url} failed: {e}"))?;
            Ok(())
        },
        timeout_secs,
        "Page navigation",
    )
    .await
}

/// Evaluate an extraction script and deserialize its JSON result into `T`.
pub async fn evaluate<T: DeserializeOwned>(page: &Page, script: &str) -> Result<T> {
    let js_result = page
        .evaluate(script)
        .await
        .context("Failed to evaluate extraction script")?;

    let value = js_result
        .into_value::<serde_json::Value>()
        .map_err(|e| anyhow!("Failed to get value from JS result: {e}"))?;

    serde_json::from_value(value).context("Failed to parse extraction script result")
}

/// Cooperative timed pause; the only suspension primitive besides navigation
/// and evaluation.
pub async fn pause(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Measured total content height of the rendered document.
pub async fn content_height(page: &Page) -> Result<f64> {
    evaluate::<f64>(page, CONTENT_HEIGHT_SCRIPT).await
}

/// Scroll the viewport downward by roughly 90% of its height.
pub async fn scroll_step(page: &Page) -> Result<()> {
    page.evaluate(SCROLL_STEP_SCRIPT)
        .await
        .map_err(|e| anyhow!("scroll step failed: {e}"))?;
    Ok(())
}
