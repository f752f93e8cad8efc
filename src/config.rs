use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Zero-based positions to pick in each dropdown, in workflow order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionIndices {
    pub reference_month: usize,
    pub brand: usize,
    pub model: usize,
    pub model_year: usize,
}

impl Default for SelectionIndices {
    fn default() -> Self {
        Self {
            reference_month: 0,
            brand: 12,
            model: 1,
            model_year: 0,
        }
    }
}

/// How one dropdown step picks its option: by position, or by typing into
/// the widget's search box and taking the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Index(usize),
    Text(String),
}

impl FromStr for Selection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(index) => Ok(Self::Index(index)),
            Err(_) => Ok(Self::Text(s.trim().to_string())),
        }
    }
}

/// The resolved choice for all four dropdown steps of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPlan {
    pub reference_month: Selection,
    pub brand: Selection,
    pub model: Selection,
    pub model_year: Selection,
}

impl SelectionPlan {
    pub fn from_indices(indices: &SelectionIndices) -> Self {
        Self {
            reference_month: Selection::Index(indices.reference_month),
            brand: Selection::Index(indices.brand),
            model: Selection::Index(indices.model),
            model_year: Selection::Index(indices.model_year),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub base_url: String,
    pub webdriver_url: String,
    pub indices: SelectionIndices,
    pub headless: bool,
    pub output_path: String,
    /// Upper bound for every element wait, in seconds.
    pub wait_timeout_secs: u64,
    /// Interval between wait polls, in milliseconds.
    pub poll_interval_ms: u64,
    /// Pause after a plain click, letting page animation settle.
    pub settle_delay_ms: u64,
    /// Pause after picking an option; dependent dropdowns reload via AJAX.
    pub reload_delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url: "https://veiculos.fipe.org.br/".to_string(),
            webdriver_url: "http://localhost:9515".to_string(),
            indices: SelectionIndices::default(),
            headless: false,
            output_path: "fipe_resultado.json".to_string(),
            wait_timeout_secs: 20,
            poll_interval_ms: 500,
            settle_delay_ms: 1000,
            reload_delay_ms: 2000,
        }
    }
}

impl RunConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: Self = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("br", "fipe", "fipe-scraper")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(proj_dirs.config_dir().join("config.json"))
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.base_url.is_empty() {
            errors.push("Base URL is required".to_string());
        }

        if self.webdriver_url.is_empty() {
            errors.push("WebDriver URL is required".to_string());
        }

        if self.output_path.is_empty() {
            errors.push("Output path is required".to_string());
        }

        if self.wait_timeout_secs == 0 {
            errors.push("Wait timeout must be greater than zero".to_string());
        }

        errors
    }
}
