//! Tests for the CSV sink: header, field escaping, multi-value joining and
//! write order.

use dirscrape::{CSV_HEADER, CsvSink, Record, csv_row, escape_field};
use tempfile::TempDir;

fn sample_record(name: &str, url: &str) -> Record {
    Record {
        name: name.to_string(),
        address: "Nevsky pr. 1".to_string(),
        phones: vec!["+78120000000".to_string(), "+78120000001".to_string()],
        website: Some("https://example.com".to_string()),
        email: vec!["info@example.com".to_string()],
        telegram: vec!["https://t.me/example".to_string()],
        source_url: url.to_string(),
    }
}

/// Reverse the stated escaping rule: strip the wrapping quotes and undouble
/// inner quotes.
fn unescape_field(field: &str) -> String {
    let inner = field
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .expect("field must be quoted");
    inner.replace("\"\"", "\"")
}

#[test]
fn escape_wraps_and_doubles_quotes() {
    assert_eq!(escape_field("plain"), "\"plain\"");
    assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_field("a,b"), "\"a,b\"");
}

#[test]
fn escape_collapses_line_breaks_to_spaces() {
    assert_eq!(escape_field("line1\nline2"), "\"line1 line2\"");
    assert_eq!(escape_field("line1\r\nline2"), "\"line1 line2\"");
    assert_eq!(escape_field("line1\rline2"), "\"line1 line2\"");
}

#[test]
fn escaping_round_trips_with_newlines_collapsed() {
    let cases = [
        ("with \"quotes\"", "with \"quotes\""),
        ("commas, everywhere, always", "commas, everywhere, always"),
        ("multi\nline\r\nvalue", "multi line value"),
        ("", ""),
    ];
    for (input, expected) in cases {
        assert_eq!(unescape_field(&escape_field(input)), expected);
    }
}

#[test]
fn row_has_seven_fields_in_fixed_order() {
    let record = sample_record("Shop", "https://2gis.ru/spb/firm/123");
    let row = csv_row(&record);
    assert_eq!(
        row,
        "\"Shop\",\"https://2gis.ru/spb/firm/123\",\
         \"+78120000000 | +78120000001\",\"https://example.com\",\
         \"info@example.com\",\"https://t.me/example\",\"Nevsky pr. 1\""
    );
}

#[test]
fn empty_fields_serialize_as_empty_quoted_strings() {
    let record = Record {
        name: String::new(),
        address: String::new(),
        phones: Vec::new(),
        website: None,
        email: Vec::new(),
        telegram: Vec::new(),
        source_url: "https://2gis.ru/spb/firm/1".to_string(),
    };
    assert_eq!(
        csv_row(&record),
        "\"\",\"https://2gis.ru/spb/firm/1\",\"\",\"\",\"\",\"\",\"\""
    );
}

#[test]
fn sink_writes_header_then_records_in_processing_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out_spb.csv");

    let mut sink = CsvSink::create(&path).unwrap();
    sink.write_record(&sample_record("First", "https://2gis.ru/spb/firm/1"))
        .unwrap();
    sink.write_record(&sample_record("Second", "https://2gis.ru/spb/firm/2"))
        .unwrap();
    sink.flush().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CSV_HEADER);
    assert!(lines[1].starts_with("\"First\""));
    assert!(lines[2].starts_with("\"Second\""));
}

#[test]
fn sink_create_fails_on_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("out.csv");
    assert!(CsvSink::create(&path).is_err());
}
