use serde::ser::{Serialize, SerializeMap, Serializer};

/// The label→value mapping extracted from the results table.
///
/// Labels are unique and kept in table row order; a repeated label keeps its
/// first position but takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceRecord {
    fields: Vec<(String, String)>,
}

impl PriceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: String, value: String) {
        if let Some(existing) = self.fields.iter_mut().find(|(l, _)| *l == label) {
            existing.1 = value;
        } else {
            self.fields.push((label, value));
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }
}

// Hand-written so the JSON object keeps insertion order; serde_json's Map
// would re-sort the labels.
impl Serialize for PriceRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_row_order() {
        let mut record = PriceRecord::new();
        record.insert("Marca".into(), "Fiat".into());
        record.insert("Modelo".into(), "Uno".into());
        record.insert("Preço Médio".into(), "R$ 45.000,00".into());

        let labels: Vec<&str> = record.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Marca", "Modelo", "Preço Médio"]);
    }

    #[test]
    fn duplicate_label_keeps_first_position_and_last_value() {
        let mut record = PriceRecord::new();
        record.insert("Marca".into(), "Fiat".into());
        record.insert("Modelo".into(), "Uno".into());
        record.insert("Marca".into(), "BYD".into());

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("Marca"), Some("BYD"));
        let labels: Vec<&str> = record.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Marca", "Modelo"]);
    }

    #[test]
    fn json_preserves_order_and_non_ascii() {
        let mut record = PriceRecord::new();
        record.insert("Mês de referência".into(), "agosto de 2025".into());
        record.insert("Preço Médio".into(), "R$ 45.000,00".into());

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"Mês de referência":"agosto de 2025","Preço Médio":"R$ 45.000,00"}"#
        );
    }

    #[test]
    fn empty_record_reports_empty() {
        let record = PriceRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.get("Marca"), None);
    }
}
