//! Failure screenshots, one per error event, for post-mortem debugging.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use thirtyfour::WebDriver;

use crate::error::Result;

/// Directory the screenshots land in, created on demand.
pub const SCREENSHOT_DIR: &str = "erros";

fn screenshot_filename(stamp: &DateTime<Local>, label: &str) -> String {
    format!("{}_{}.png", stamp.format("%Y-%m-%d_%H-%M-%S"), label)
}

/// Saves a screenshot tagged with `label` and the current time.
///
/// Returns the path written so callers can mention it in their logs.
pub async fn capture_screenshot(driver: &WebDriver, label: &str) -> Result<PathBuf> {
    let dir = Path::new(SCREENSHOT_DIR);
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(screenshot_filename(&Local::now(), label));
    driver.screenshot(&path).await?;
    tracing::info!("failure screenshot saved to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_is_stamp_then_label() {
        let stamp = Local.with_ymd_and_hms(2025, 8, 7, 14, 30, 5).unwrap();
        assert_eq!(
            screenshot_filename(&stamp, "click_error"),
            "2025-08-07_14-30-05_click_error.png"
        );
    }
}
