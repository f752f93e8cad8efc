//! Automated FIPE vehicle price lookup via WebDriver.
//!
//! Drives the public consultation page through its dropdown cascade
//! (reference month, brand, model, model year), scrapes the resulting price
//! table into an ordered record, and writes it out as indented JSON.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod models;
pub mod scraper;
pub mod selectors;
