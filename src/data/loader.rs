//! CSV Data Loader Module
//! Handles CSV file loading and schema validation using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

use super::record::{Article, Dataset};

/// Required columns. Everything else is passed through untouched.
pub const PMID_COLUMN: &str = "PMID";
pub const TITLE_COLUMN: &str = "Title";
pub const YEAR_COLUMN: &str = "Publication Year";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("input file not found: '{0}'")]
    InputNotFound(String),
    #[error("failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("required column '{0}' is missing from the input")]
    MissingColumn(&'static str),
}

/// Load a CSV export and convert it into typed article records.
///
/// The schema is validated once here: a missing required column fails
/// fast with [`LoaderError::MissingColumn`] instead of surfacing later
/// as an obscure lookup error.
pub fn load_articles(path: &Path) -> Result<Dataset, LoaderError> {
    if !path.is_file() {
        return Err(LoaderError::InputNotFound(path.display().to_string()));
    }

    let path_str = path.to_string_lossy();
    let df = LazyCsvReader::new(path_str.as_ref())
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let pmid_col = df
        .column(PMID_COLUMN)
        .map_err(|_| LoaderError::MissingColumn(PMID_COLUMN))?;
    let title_col = df
        .column(TITLE_COLUMN)
        .map_err(|_| LoaderError::MissingColumn(TITLE_COLUMN))?;
    let year_col = df
        .column(YEAR_COLUMN)
        .map_err(|_| LoaderError::MissingColumn(YEAR_COLUMN))?;

    let all_columns = df.get_columns();
    let mut articles = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let mut fields = Vec::with_capacity(all_columns.len());
        for col in all_columns {
            let cell = col.get(i).ok().and_then(cell_to_string);
            fields.push(cell.unwrap_or_default());
        }

        let pmid = pmid_col.get(i).ok().and_then(cell_to_string);
        let title = title_col.get(i).ok().and_then(cell_to_string);
        let year = year_col
            .get(i)
            .ok()
            .and_then(cell_to_string)
            .and_then(|s| parse_year(&s));

        articles.push(Article {
            pmid,
            title,
            year,
            fields,
        });
    }

    Ok(Dataset { columns, articles })
}

/// Render a cell as a plain string; nulls become `None`.
fn cell_to_string(value: AnyValue) -> Option<String> {
    if value.is_null() {
        None
    } else {
        Some(value.to_string().trim_matches('"').to_string())
    }
}

/// Lenient year coercion: integer, or float rendered like "2019.0".
fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| f.trunc() as i32)
}
