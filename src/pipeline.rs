//! Pipeline Module
//! Runs the five stages end to end: load, dedup, classify, aggregate,
//! report.

use std::path::{Path, PathBuf};

use chrono::Local;
use log::{error, info, warn};

use crate::analysis::{aggregate_by_year, Classifier};
use crate::charts::render_trend_chart;
use crate::config::AnalysisConfig;
use crate::data::{dedup, load_articles, LoaderError};
use crate::report::write_relevant_articles;

/// Which reporter outputs to produce.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub chart: bool,
    pub export: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            chart: true,
            export: true,
        }
    }
}

/// What one run did, for the console summary.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub initial_count: usize,
    pub final_count: usize,
    pub relevant_count: usize,
    pub years_covered: usize,
    pub skipped_no_year: usize,
    pub chart_path: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
}

/// Run the whole pipeline once. Only a missing or unreadable input
/// aborts the run; chart and export are independent outputs and a
/// failure writing one is logged without blocking the other.
pub fn run(
    input: &Path,
    config: &AnalysisConfig,
    options: RunOptions,
) -> Result<RunSummary, LoaderError> {
    let dataset = load_articles(input)?;
    let (dataset, report) = dedup(dataset);
    info!(
        "[{}] dedup complete: {} -> {} records",
        config.source_name, report.initial, report.after_title
    );

    let classifier = Classifier::new(&config.topic_keywords, &config.method_keyword);
    let flags = classifier.classify_all(&dataset);
    let breakdown = aggregate_by_year(&dataset, &flags);
    if breakdown.skipped_no_year > 0 {
        warn!(
            "{} records without a usable publication year were excluded from the yearly stats",
            breakdown.skipped_no_year
        );
    }

    let mut summary = RunSummary {
        initial_count: report.initial,
        final_count: report.after_title,
        relevant_count: flags.iter().filter(|f| f.is_topic).count(),
        years_covered: breakdown.stats.len(),
        skipped_no_year: breakdown.skipped_no_year,
        ..Default::default()
    };

    // Chart and export share one timestamp so a run's outputs pair up.
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let source_code = config.source_code();

    if options.chart {
        if breakdown.stats.is_empty() {
            info!("no yearly data present; chart skipped");
        } else {
            let chart_path = config
                .out_dir
                .join(format!("{}_Trend_Analysis_{}.png", source_code, timestamp));
            match render_trend_chart(&breakdown.stats, &config.source_name, &chart_path) {
                Ok(()) => {
                    info!("trend chart saved to '{}'", chart_path.display());
                    summary.chart_path = Some(chart_path);
                }
                Err(err) => error!("failed to render trend chart: {}", err),
            }
        }
    }

    if options.export {
        let export_path = config
            .out_dir
            .join(format!("{}_Relevant_Papers_{}.csv", source_code, timestamp));
        match write_relevant_articles(&dataset, &flags, &export_path) {
            Ok(Some(count)) => {
                info!(
                    "{} relevant papers saved to '{}'",
                    count,
                    export_path.display()
                );
                summary.export_path = Some(export_path);
            }
            Ok(None) => info!("no papers matched the configured keywords; export skipped"),
            Err(err) => error!("failed to write relevant paper export: {}", err),
        }
    }

    Ok(summary)
}
