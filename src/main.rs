//! revtrend - Review Paper Trend Analysis
//!
//! Batch CLI: analyze a journal CSV export and produce a trend chart
//! plus a filtered export of topic-relevant papers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::error;

use revtrend::config::{AnalysisConfig, KeywordPreset};
use revtrend::pipeline::{self, RunOptions};

#[derive(Parser, Debug)]
#[command(
    name = "revtrend",
    version,
    about = "Analyze review paper trends in a journal CSV export"
)]
struct Cli {
    /// CSV export to analyze (needs PMID, Title and Publication Year columns)
    input: PathBuf,

    /// Source name for chart title and output filenames (defaults to the input file stem)
    #[arg(long)]
    source_name: Option<String>,

    /// Built-in topic keyword preset
    #[arg(long, value_enum, default_value_t = KeywordPreset::Unified)]
    preset: KeywordPreset,

    /// JSON file overriding the topic/method keywords
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Directory for the chart and export files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Skip the trend chart
    #[arg(long)]
    no_chart: bool,

    /// Skip the relevant paper export
    #[arg(long)]
    no_export: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let source_name = cli.source_name.clone().unwrap_or_else(|| {
        cli.input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Journal".to_string())
    });

    let mut config = AnalysisConfig::new(source_name, cli.preset);
    config.out_dir = cli.out_dir.clone();
    if let Some(path) = &cli.keywords {
        config
            .apply_keyword_file(path)
            .with_context(|| format!("loading keyword file '{}'", path.display()))?;
    }

    let options = RunOptions {
        chart: !cli.no_chart,
        export: !cli.no_export,
    };
    let summary = pipeline::run(&cli.input, &config, options)?;

    println!(
        "[{}] {} -> {} records after dedup, {} relevant, {} years covered",
        config.source_name,
        summary.initial_count,
        summary.final_count,
        summary.relevant_count,
        summary.years_covered
    );

    Ok(())
}
