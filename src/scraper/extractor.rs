//! Turns the rendered results table into a [`PriceRecord`].

use thirtyfour::prelude::*;

use crate::error::Result;
use crate::models::PriceRecord;
use crate::scraper::browser::BrowserDriver;
use crate::selectors;

/// Scrapes the results table, or returns `None` if it never renders or
/// cannot be read. Failures are logged and screenshotted here; they do not
/// abort the caller.
pub async fn extract_price_table(browser: &BrowserDriver) -> Option<PriceRecord> {
    tracing::info!("extracting data from the results table...");

    match try_extract(browser).await {
        Ok(record) => {
            tracing::info!("extracted {} fields", record.len());
            Some(record)
        }
        Err(e) => {
            tracing::error!("extraction error: {}", e);
            browser.capture_failure("extraction_error").await;
            None
        }
    }
}

async fn try_extract(browser: &BrowserDriver) -> Result<PriceRecord> {
    // The marker text only shows up once the table has rendered.
    browser.wait_for_body_text(selectors::RESULT_MARKER).await?;

    let table = browser.wait_for_present(By::Tag("table")).await?;
    let rows = table.find_all(By::Tag("tr")).await?;

    let mut raw_rows = Vec::with_capacity(rows.len());
    for row in rows {
        let cells = row.find_all(By::Tag("td")).await?;
        let mut texts = Vec::with_capacity(cells.len());
        for cell in cells {
            texts.push(cell.text().await?);
        }
        raw_rows.push(texts);
    }

    Ok(record_from_rows(&raw_rows))
}

/// Converts raw table rows into the final record.
///
/// Only rows with exactly two cells contribute; the first cell (trimmed, one
/// trailing colon stripped) becomes the label, the second the value. Rows
/// with an empty label or value after trimming are skipped.
pub fn record_from_rows(rows: &[Vec<String>]) -> PriceRecord {
    let mut record = PriceRecord::new();

    for row in rows {
        if row.len() != 2 {
            continue;
        }

        let label = row[0].trim().trim_end_matches(':').trim().to_string();
        let value = row[1].trim().to_string();

        if label.is_empty() || value.is_empty() {
            continue;
        }

        record.insert(label, value);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn two_cell_rows_become_fields() {
        let rows = vec![
            row(&["Marca:", "Fiat"]),
            row(&["Modelo:", "Uno Mille 1.0"]),
            row(&["Preço Médio:", "R$ 45.000,00"]),
        ];

        let record = record_from_rows(&rows);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("Marca"), Some("Fiat"));
        assert_eq!(record.get("Preço Médio"), Some("R$ 45.000,00"));
    }

    #[test]
    fn other_column_counts_are_skipped() {
        let rows = vec![
            row(&["header spanning the table"]),
            row(&["Marca:", "Fiat"]),
            row(&["a", "b", "c"]),
            row(&[]),
        ];

        let record = record_from_rows(&rows);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("Marca"), Some("Fiat"));
    }

    #[test]
    fn empty_labels_or_values_are_skipped() {
        let rows = vec![
            row(&["  :", "Fiat"]),
            row(&["Marca:", "   "]),
            row(&["Modelo:", "Uno"]),
        ];

        let record = record_from_rows(&rows);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("Modelo"), Some("Uno"));
    }

    #[test]
    fn label_trimming_strips_one_trailing_colon() {
        let rows = vec![row(&["  Ano Modelo:  ", " 2020 Gasolina "])];

        let record = record_from_rows(&rows);
        assert_eq!(record.get("Ano Modelo"), Some("2020 Gasolina"));
    }

    #[test]
    fn row_order_is_preserved() {
        let rows = vec![
            row(&["Mês de referência:", "agosto de 2025"]),
            row(&["Código Fipe:", "001004-9"]),
            row(&["Marca:", "Fiat"]),
        ];

        let record = record_from_rows(&rows);
        let labels: Vec<&str> = record.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Mês de referência", "Código Fipe", "Marca"]);
    }
}
