pub mod browser;
pub mod dropdown;
pub mod extractor;

use std::fmt;
use thirtyfour::By;

use crate::config::{RunConfig, Selection, SelectionPlan};
use crate::error::Result;
use crate::models::PriceRecord;
use crate::selectors::{self, DropdownSelectors};
use browser::BrowserDriver;

/// Progress of a run through the fixed selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Init,
    PageLoaded,
    CategorySelected,
    PeriodSelected,
    BrandSelected,
    ModelSelected,
    YearSelected,
    Searched,
    Extracted,
    Failed,
    Closed,
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::PageLoaded => "page loaded",
            Self::CategorySelected => "category selected",
            Self::PeriodSelected => "reference month selected",
            Self::BrandSelected => "brand selected",
            Self::ModelSelected => "model selected",
            Self::YearSelected => "model year selected",
            Self::Searched => "searched",
            Self::Extracted => "extracted",
            Self::Failed => "failed",
            Self::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Drives one browser session through the whole consultation flow.
///
/// The engine exclusively owns the session handle; `run_query` consumes the
/// engine and closes the session exactly once on every path.
pub struct FipeScraper {
    browser: BrowserDriver,
    config: RunConfig,
    state: WorkflowState,
}

impl FipeScraper {
    pub async fn new(config: RunConfig) -> Result<Self> {
        let browser = BrowserDriver::new(&config).await?;

        Ok(Self {
            browser,
            config,
            state: WorkflowState::Init,
        })
    }

    /// Runs the full selection flow and extraction.
    ///
    /// Returns `None` when the run failed anywhere along the way; the log and
    /// the `erros/` screenshots say where. The browser session is torn down
    /// before this returns, success or failure.
    pub async fn run_query(mut self, plan: &SelectionPlan) -> Option<PriceRecord> {
        let outcome = match self.drive(plan).await {
            Ok(record) => record,
            Err(e) => {
                let reached = self.state;
                self.state = WorkflowState::Failed;
                tracing::error!("fatal flow failure after '{}': {}", reached, e);
                self.browser.capture_failure("fatal_error").await;
                None
            }
        };

        self.close().await;
        outcome
    }

    async fn drive(&mut self, plan: &SelectionPlan) -> Result<Option<PriceRecord>> {
        tracing::info!("step 1/8: opening {}", self.config.base_url);
        self.browser.open(&self.config.base_url).await?;
        self.state = WorkflowState::PageLoaded;

        tracing::info!("step 2/8: selecting the cars category");
        self.browser.click(selectors::CARS_TAB).await?;
        self.state = WorkflowState::CategorySelected;

        tracing::info!("step 3/8: selecting the reference month");
        self.select_step(
            &selectors::REFERENCE_MONTH,
            &plan.reference_month,
            selectors::BRAND.trigger,
        )
        .await?;
        self.state = WorkflowState::PeriodSelected;

        tracing::info!("step 4/8: selecting the brand");
        self.select_step(&selectors::BRAND, &plan.brand, selectors::MODEL.trigger)
            .await?;
        self.state = WorkflowState::BrandSelected;

        tracing::info!("step 5/8: selecting the model");
        self.select_step(&selectors::MODEL, &plan.model, selectors::MODEL_YEAR.trigger)
            .await?;
        self.state = WorkflowState::ModelSelected;

        tracing::info!("step 6/8: selecting the model year");
        self.select_step(
            &selectors::MODEL_YEAR,
            &plan.model_year,
            selectors::SEARCH_BUTTON,
        )
        .await?;
        self.state = WorkflowState::YearSelected;

        tracing::info!("step 7/8: searching for prices");
        self.browser.click(selectors::SEARCH_BUTTON).await?;
        self.state = WorkflowState::Searched;

        tracing::info!("step 8/8: extracting the results table");
        let record = extractor::extract_price_table(&self.browser).await;
        self.state = WorkflowState::Extracted;

        Ok(record)
    }

    /// Opens one dropdown, applies the selection, and waits for the next
    /// control to become clickable. The dependent dropdowns are repopulated
    /// by AJAX after a selection, with no other completion signal.
    async fn select_step(
        &self,
        widget: &DropdownSelectors,
        selection: &Selection,
        next_ready: &str,
    ) -> Result<()> {
        self.browser.click(widget.trigger).await?;

        match selection {
            Selection::Index(index) => {
                dropdown::select_by_index(&self.browser, widget, *index).await?
            }
            Selection::Text(text) => dropdown::select_by_text(&self.browser, widget, text).await?,
        }

        self.browser.wait_for_clickable(By::XPath(next_ready)).await?;
        Ok(())
    }

    async fn close(&mut self) {
        tracing::info!("closing browser session");
        if let Err(e) = self.browser.quit().await {
            tracing::warn!("browser session did not close cleanly: {}", e);
        }
        self.state = WorkflowState::Closed;
    }
}
