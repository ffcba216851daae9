//! Analysis module - title classification and yearly aggregation

mod aggregator;
mod classifier;

pub use aggregator::{aggregate_by_year, YearlyBreakdown, YearlyStat};
pub use classifier::{Classification, Classifier};
