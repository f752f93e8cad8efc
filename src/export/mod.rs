pub mod json;

use anyhow::Result;

use crate::models::PriceRecord;
use json::JsonExporter;

pub trait Exporter {
    fn export(&self, record: &PriceRecord, path: &str) -> Result<()>;
}

/// Persists the extracted record, or logs that there is nothing to persist.
///
/// A missing or empty record performs no write at all; an existing file at
/// `path` is overwritten unconditionally otherwise.
pub fn save_result(record: Option<&PriceRecord>, path: &str) -> Result<()> {
    match record {
        Some(record) if !record.is_empty() => {
            JsonExporter::new().export(record, path)?;
            tracing::info!("data saved to {}", path);
        }
        _ => {
            tracing::warn!("no data to save");
        }
    }

    Ok(())
}
