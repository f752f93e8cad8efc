use std::time::{Duration, Instant};
use thirtyfour::prelude::*;
use tokio::time::sleep;

use crate::config::RunConfig;
use crate::diagnostics;
use crate::error::{Result, ScrapeError};

/// Timing knobs shared by every wait in a run.
#[derive(Debug, Clone, Copy)]
pub struct WaitProfile {
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
    pub settle_delay: Duration,
    pub reload_delay: Duration,
}

impl WaitProfile {
    pub fn from_config(config: &RunConfig) -> Self {
        Self {
            wait_timeout: Duration::from_secs(config.wait_timeout_secs),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            reload_delay: Duration::from_millis(config.reload_delay_ms),
        }
    }
}

pub struct BrowserDriver {
    driver: WebDriver,
    waits: WaitProfile,
}

impl BrowserDriver {
    pub async fn new(config: &RunConfig) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();

        let mut chrome_args = vec![
            "--disable-blink-features=AutomationControlled".to_string(),
            "--window-size=1280,900".to_string(),
        ];

        if config.headless {
            chrome_args.push("--headless".to_string());
            chrome_args.push("--disable-gpu".to_string());
        }

        for arg in &chrome_args {
            caps.add_arg(arg)
                .map_err(|e| ScrapeError::Session(e.to_string()))?;
        }

        let driver = WebDriver::new(&config.webdriver_url, caps)
            .await
            .map_err(|e| {
                ScrapeError::Session(format!(
                    "could not connect to WebDriver at {}: {}",
                    config.webdriver_url, e
                ))
            })?;

        Ok(Self {
            driver,
            waits: WaitProfile::from_config(config),
        })
    }

    pub fn waits(&self) -> WaitProfile {
        self.waits
    }

    pub async fn open(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    /// Waits until the locator resolves to an element at all.
    pub async fn wait_for_present(&self, by: By) -> Result<WebElement> {
        let deadline = Instant::now() + self.waits.wait_timeout;

        loop {
            if let Ok(element) = self.driver.find(by.clone()).await {
                return Ok(element);
            }

            if Instant::now() >= deadline {
                return Err(self.timeout(format!("element {:?}", by)));
            }

            sleep(self.waits.poll_interval).await;
        }
    }

    /// Waits until the locator resolves to a displayed element.
    pub async fn wait_for_visible(&self, by: By) -> Result<WebElement> {
        let deadline = Instant::now() + self.waits.wait_timeout;

        loop {
            if let Ok(element) = self.driver.find(by.clone()).await {
                if element.is_displayed().await.unwrap_or(false) {
                    return Ok(element);
                }
            }

            if Instant::now() >= deadline {
                return Err(self.timeout(format!("visible element {:?}", by)));
            }

            sleep(self.waits.poll_interval).await;
        }
    }

    /// Waits until the locator resolves to a displayed, enabled element.
    pub async fn wait_for_clickable(&self, by: By) -> Result<WebElement> {
        let deadline = Instant::now() + self.waits.wait_timeout;

        loop {
            if let Ok(element) = self.driver.find(by.clone()).await {
                if element.is_displayed().await.unwrap_or(false)
                    && element.is_enabled().await.unwrap_or(false)
                {
                    return Ok(element);
                }
            }

            if Instant::now() >= deadline {
                return Err(self.timeout(format!("clickable element {:?}", by)));
            }

            sleep(self.waits.poll_interval).await;
        }
    }

    /// Waits until `marker` appears anywhere in the page body.
    pub async fn wait_for_body_text(&self, marker: &str) -> Result<()> {
        let deadline = Instant::now() + self.waits.wait_timeout;

        loop {
            if let Ok(body) = self.driver.find(By::Tag("body")).await {
                if let Ok(text) = body.text().await {
                    if text.contains(marker) {
                        return Ok(());
                    }
                }
            }

            if Instant::now() >= deadline {
                return Err(self.timeout(format!("text {:?} in page body", marker)));
            }

            sleep(self.waits.poll_interval).await;
        }
    }

    /// Clicks the element at `xpath` once it is clickable, then pauses so the
    /// page animation can settle.
    pub async fn click(&self, xpath: &str) -> Result<()> {
        match self.try_click(xpath).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!("error clicking {}: {}", xpath, e);
                self.capture_failure("click_error").await;
                Err(e)
            }
        }
    }

    async fn try_click(&self, xpath: &str) -> Result<()> {
        let element = self.wait_for_clickable(By::XPath(xpath)).await?;
        element.click().await?;
        sleep(self.waits.settle_delay).await;
        Ok(())
    }

    /// Clears the search box at `xpath` and types `text` into it.
    pub async fn fill_search(&self, xpath: &str, text: &str) -> Result<()> {
        let field = self.wait_for_present(By::XPath(xpath)).await?;
        field.clear().await?;
        field.send_keys(text).await?;
        Ok(())
    }

    /// Best-effort screenshot; failures to capture are logged, never raised.
    pub async fn capture_failure(&self, label: &str) {
        if let Err(e) = diagnostics::capture_screenshot(&self.driver, label).await {
            tracing::warn!("could not capture {} screenshot: {}", label, e);
        }
    }

    pub async fn quit(&self) -> Result<()> {
        // Clone the handle to move it into quit()
        self.driver.clone().quit().await?;
        Ok(())
    }

    fn timeout(&self, what: String) -> ScrapeError {
        ScrapeError::WaitTimeout {
            what,
            timeout: self.waits.wait_timeout,
        }
    }
}
