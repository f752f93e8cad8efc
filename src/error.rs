//! Error types for the scraping workflow.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// The primary error type for a scraping run.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// An expected element never reached the required state within the bound.
    #[error("timed out after {timeout:?} waiting for {what}")]
    WaitTimeout { what: String, timeout: Duration },

    /// Could not create the WebDriver session.
    #[error("WebDriver session error: {0}")]
    Session(String),

    /// A WebDriver command failed mid-flow.
    #[error("WebDriver command error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// File input/output error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
