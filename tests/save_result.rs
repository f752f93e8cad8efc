// tests/save_result.rs
use std::fs;
use std::path::PathBuf;

use fipe_scraper::export::json::JsonExporter;
use fipe_scraper::export::{save_result, Exporter};
use fipe_scraper::models::PriceRecord;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("fipe_writer_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample_record() -> PriceRecord {
    let mut record = PriceRecord::new();
    record.insert("Mês de referência".into(), "agosto de 2025".into());
    record.insert("Marca".into(), "Fiat".into());
    record.insert("Modelo".into(), "Uno Mille 1.0".into());
    record.insert("Preço Médio".into(), "R$ 45.000,00".into());
    record
}

#[test]
fn writes_indented_utf8_json() {
    let path = tmp_dir("write").join("fipe_resultado.json");
    let path_str = path.to_str().unwrap();

    save_result(Some(&sample_record()), path_str).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("{\n    \""));
    assert!(content.contains(r#""Preço Médio": "R$ 45.000,00""#));
    // Non-ASCII must land verbatim, never as \u escapes.
    assert!(!content.contains("\\u"));
}

#[test]
fn field_order_follows_insertion() {
    let path = tmp_dir("order").join("out.json");
    let path_str = path.to_str().unwrap();

    save_result(Some(&sample_record()), path_str).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let month = content.find("Mês de referência").unwrap();
    let brand = content.find("Marca").unwrap();
    let price = content.find("Preço Médio").unwrap();
    assert!(month < brand && brand < price);
}

#[test]
fn absent_record_writes_nothing() {
    let path = tmp_dir("absent").join("out.json");

    save_result(None, path.to_str().unwrap()).unwrap();

    assert!(!path.exists());
}

#[test]
fn empty_record_writes_nothing() {
    let path = tmp_dir("empty").join("out.json");

    save_result(Some(&PriceRecord::new()), path.to_str().unwrap()).unwrap();

    assert!(!path.exists());
}

#[test]
fn existing_file_is_overwritten() {
    let path = tmp_dir("overwrite").join("out.json");
    fs::write(&path, "stale contents").unwrap();

    save_result(Some(&sample_record()), path.to_str().unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale contents"));
    assert!(content.contains("Uno Mille 1.0"));
}

#[test]
fn compact_mode_skips_indentation() {
    let path = tmp_dir("compact").join("out.json");
    let exporter = JsonExporter::new().pretty(false);

    exporter
        .export(&sample_record(), path.to_str().unwrap())
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains('\n'));
    assert!(content.contains(r#""Marca":"Fiat""#));
}
