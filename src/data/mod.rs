//! Data module - CSV loading, typed records and deduplication

mod dedup;
mod loader;
mod record;

pub use dedup::{dedup, DedupReport};
pub use loader::{load_articles, LoaderError, PMID_COLUMN, TITLE_COLUMN, YEAR_COLUMN};
pub use record::{Article, Dataset};
