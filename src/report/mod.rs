//! Report module - filtered CSV export

mod export;

pub use export::{write_relevant_articles, ExportError};
