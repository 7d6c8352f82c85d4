//! CSV record sink.
//!
//! Streams one quoted, comma-separated row per record in processing order:
//! header once, then `name, card_url, phones, website, email, telegram,
//! address`. Multi-valued fields are joined with `" | "` before escaping;
//! inside a field, double quotes are doubled and line breaks collapse to
//! single spaces.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::scrape_engine::Record;

/// Header row matching the fixed field order of [`csv_row`].
pub const CSV_HEADER: &str =
    r#""name","card_url","phones","website","email","telegram","address""#;

/// Separator for multi-valued fields, applied before escaping.
const MULTI_VALUE_SEPARATOR: &str = " | ";

/// Escape one field: collapse line breaks to spaces, double inner quotes,
/// wrap in double quotes.
#[must_use]
pub fn escape_field(value: &str) -> String {
    let collapsed = value
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('"', "\"\"");
    format!("\"{collapsed}\"")
}

/// Serialize a record as one CSV row (without trailing newline).
#[must_use]
pub fn csv_row(record: &Record) -> String {
    let fields = [
        record.name.as_str(),
        record.source_url.as_str(),
        &record.phones.join(MULTI_VALUE_SEPARATOR),
        record.website.as_deref().unwrap_or(""),
        &record.email.join(MULTI_VALUE_SEPARATOR),
        &record.telegram.join(MULTI_VALUE_SEPARATOR),
        record.address.as_str(),
    ];
    fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Buffered CSV writer, flushed per row so a partially completed run still
/// leaves every written record on disk.
pub struct CsvSink {
    writer: BufWriter<File>,
}

impl CsvSink {
    /// Create the output file and write the header row.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be created or the header cannot be
    /// written; both are fatal setup failures for the run.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{CSV_HEADER}").context("cannot write CSV header")?;
        writer.flush().context("cannot flush CSV header")?;
        Ok(Self { writer })
    }

    /// Append one record row; write order equals processing order.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.writer, "{}", csv_row(record)).context("cannot write CSV row")?;
        self.writer.flush().context("cannot flush CSV row")
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("cannot flush CSV output")
    }
}
