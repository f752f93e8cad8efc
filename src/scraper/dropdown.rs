//! Navigation of the portal's "chosen"-style dropdown widgets.

use thirtyfour::prelude::*;
use tokio::time::sleep;

use crate::error::{Result, ScrapeError};
use crate::scraper::browser::BrowserDriver;
use crate::selectors::DropdownSelectors;

/// Clicks the option at `index` in an already-opened dropdown.
///
/// An out-of-range index is logged as a warning and otherwise ignored; the
/// caller's later steps then act on whatever state the page is in.
pub async fn select_by_index(
    browser: &BrowserDriver,
    dropdown: &DropdownSelectors,
    index: usize,
) -> Result<()> {
    match try_select_by_index(browser, dropdown, index).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("error selecting option {}: {}", index, e);
            browser.capture_failure("selection_error").await;
            Err(e)
        }
    }
}

async fn try_select_by_index(
    browser: &BrowserDriver,
    dropdown: &DropdownSelectors,
    index: usize,
) -> Result<()> {
    let list = browser.wait_for_visible(By::XPath(dropdown.list)).await?;
    let options = list.find_all(By::Tag("li")).await?;

    if index < options.len() {
        let text = options[index].text().await.unwrap_or_default();
        tracing::info!("selecting option {}: {}", index, text);
        options[index].click().await?;
        // The portal repopulates dependent dropdowns via AJAX after this click.
        sleep(browser.waits().reload_delay).await;
    } else {
        tracing::warn!(
            "index {} does not exist in the list ({} options)",
            index,
            options.len()
        );
    }

    Ok(())
}

/// Types `text` into the dropdown's filter box and clicks the first visible
/// match in the narrowed list.
pub async fn select_by_text(
    browser: &BrowserDriver,
    dropdown: &DropdownSelectors,
    text: &str,
) -> Result<()> {
    match try_select_by_text(browser, dropdown, text).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("error selecting option {:?}: {}", text, e);
            browser.capture_failure("selection_error").await;
            Err(e)
        }
    }
}

async fn try_select_by_text(
    browser: &BrowserDriver,
    dropdown: &DropdownSelectors,
    text: &str,
) -> Result<()> {
    browser.fill_search(dropdown.search, text).await?;

    let list = browser.wait_for_visible(By::XPath(dropdown.list)).await?;
    let options = list.find_all(By::Tag("li")).await?;

    for option in options {
        if option.is_displayed().await.unwrap_or(false) {
            let label = option.text().await.unwrap_or_default();
            tracing::info!("selecting option matching {:?}: {}", text, label);
            option.click().await?;
            sleep(browser.waits().reload_delay).await;
            return Ok(());
        }
    }

    Err(ScrapeError::WaitTimeout {
        what: format!("visible option matching {:?}", text),
        timeout: browser.waits().wait_timeout,
    })
}
