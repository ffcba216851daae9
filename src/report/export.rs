//! Filtered Export Module
//! Writes the topic-relevant articles back out as CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::analysis::Classification;
use crate::data::Dataset;

// Spreadsheet tools need the BOM to detect UTF-8.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write export row: {0}")]
    Csv(#[from] csv::Error),
}

/// Write every article whose topic flag is set, in original column
/// order with no classification columns added. Returns the number of
/// rows written, or `None` when nothing qualified (no file is created).
pub fn write_relevant_articles(
    dataset: &Dataset,
    flags: &[Classification],
    path: &Path,
) -> Result<Option<usize>, ExportError> {
    let relevant: Vec<_> = dataset
        .articles
        .iter()
        .zip(flags)
        .filter(|(_, flag)| flag.is_topic)
        .map(|(article, _)| article)
        .collect();

    if relevant.is_empty() {
        return Ok(None);
    }

    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(&dataset.columns)?;
    for article in &relevant {
        writer.write_record(&article.fields)?;
    }
    writer.flush()?;

    Ok(Some(relevant.len()))
}
