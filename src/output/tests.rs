//! Tests for output module

use super::*;
use serde_json::json;
use tempfile::tempdir;

fn article(date: &str, url: &str, sentiment: serde_json::Value, wgt: i64) -> serde_json::Value {
    json!({
        "uri": "8000000001",
        "date": date,
        "url": url,
        "title": "Ignored, with a comma",
        "sentiment": sentiment,
        "wgt": wgt
    })
}

#[test]
fn test_article_csv_rows_without_header() {
    let mut writer = ResultWriter::new(Vec::new(), OutputFormat::Csv, ItemKind::Article);
    writer
        .write_item(&article("2024-01-02", "https://a.example/1", json!(0.25), 310))
        .unwrap();
    writer
        .write_item(&article("2024-01-03", "https://a.example/2", json!(null), 5))
        .unwrap();
    assert_eq!(writer.written(), 2);

    let out = String::from_utf8(writer.finish().unwrap()).unwrap();
    assert_eq!(
        out,
        "2024-01-02,https://a.example/1,0.25,310\n2024-01-03,https://a.example/2,,5\n"
    );
}

#[test]
fn test_event_csv_rows() {
    let mut writer = ResultWriter::new(Vec::new(), OutputFormat::Csv, ItemKind::Event);
    writer
        .write_item(&json!({
            "uri": "eng-123",
            "eventDate": "2024-02-10",
            "totalArticleCount": 42,
            "wgt": 7,
            "title": {"eng": "Something happened"}
        }))
        .unwrap();

    let out = String::from_utf8(writer.finish().unwrap()).unwrap();
    assert_eq!(out, "2024-02-10,eng-123,42,7\n");
}

#[test]
fn test_json_lines() {
    let mut writer = ResultWriter::new(Vec::new(), OutputFormat::Json, ItemKind::Event);
    writer.write_item(&json!({"uri": "e-1"})).unwrap();
    writer.write_item(&json!({"uri": "e-2"})).unwrap();

    let out = String::from_utf8(writer.finish().unwrap()).unwrap();
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines, vec![json!({"uri": "e-1"}), json!({"uri": "e-2"})]);
}

#[test]
fn test_non_object_item_is_rejected_in_csv() {
    let mut writer = ResultWriter::new(Vec::new(), OutputFormat::Csv, ItemKind::Article);
    assert!(writer.write_item(&json!("just a string")).is_err());
    assert_eq!(writer.written(), 0);
}

#[test]
fn test_create_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("amazon.csv");

    let mut writer = ResultWriter::create(&path, OutputFormat::Csv, ItemKind::Article).unwrap();
    writer
        .write_item(&article("2024-05-01", "https://b.example/x", json!(-0.5), 1))
        .unwrap();
    writer.finish().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "2024-05-01,https://b.example/x,-0.5,1\n");
}
