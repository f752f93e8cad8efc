use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::Write;

use super::Exporter;
use crate::models::PriceRecord;

pub struct JsonExporter {
    pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Exporter for JsonExporter {
    fn export(&self, record: &PriceRecord, path: &str) -> Result<()> {
        let json = if self.pretty {
            // Four-space indentation; non-ASCII text stays verbatim.
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = Serializer::with_formatter(&mut buf, formatter);
            record.serialize(&mut ser)?;
            buf
        } else {
            serde_json::to_vec(record)?
        };

        let mut file = File::create(path)?;
        file.write_all(&json)?;

        Ok(())
    }
}
