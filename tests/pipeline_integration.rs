//! End-to-end pipeline tests over a small journal export.

use std::fs;
use std::path::{Path, PathBuf};

use revtrend::config::{AnalysisConfig, KeywordPreset};
use revtrend::data::LoaderError;
use revtrend::pipeline::{self, RunOptions};

const SAMPLE_CSV: &str = "\
PMID,Title,Publication Year,Journal
1001,A Scoping Review of MRI Preparation Techniques,2019,Pediatric Radiology
1001,Duplicate PMID Row,2019,Pediatric Radiology
1002,A Scoping Review of MRI Preparation Techniques,2020,Pediatric Radiology
1003,Pediatric Anesthesia Outcomes: A Retrospective Cohort,2021,Pediatric Radiology
1004,Unrelated Cardiology Paper,2021,Pediatric Radiology
";

fn write_input(dir: &Path) -> PathBuf {
    let path = dir.join("Pediatric Radiology.csv");
    fs::write(&path, SAMPLE_CSV).unwrap();
    path
}

fn config(dir: &Path) -> AnalysisConfig {
    let mut config = AnalysisConfig::new("Pediatric Radiology", KeywordPreset::Unified);
    config.out_dir = dir.to_path_buf();
    config
}

#[test]
fn full_run_dedups_classifies_and_exports() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let options = RunOptions {
        chart: false,
        export: true,
    };
    let summary = pipeline::run(&input, &config(dir.path()), options).unwrap();

    // One row dropped per dedup pass: the repeated PMID, then the
    // repeated title under a different PMID.
    assert_eq!(summary.initial_count, 5);
    assert_eq!(summary.final_count, 3);
    // MRI/scoping title and anesthesia title are topic-relevant.
    assert_eq!(summary.relevant_count, 2);
    assert_eq!(summary.years_covered, 2);
    assert_eq!(summary.skipped_no_year, 0);

    let export_path = summary.export_path.expect("export should be written");
    let file_name = export_path.file_name().unwrap().to_string_lossy();
    assert!(file_name.starts_with("Pediatric_Radiology_Relevant_Papers_"));
    assert!(file_name.ends_with(".csv"));

    let bytes = fs::read(&export_path).unwrap();
    assert!(bytes.starts_with(b"\xef\xbb\xbf"));

    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "PMID,Title,Publication Year,Journal");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("A Scoping Review of MRI Preparation Techniques"));
    assert!(lines[2].contains("Pediatric Anesthesia Outcomes"));
    // Classification stays transient; no extra columns in the export.
    assert_eq!(lines[1].matches(',').count(), 3);
}

#[test]
fn zero_matches_skips_export_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("journal.csv");
    fs::write(
        &input,
        "PMID,Title,Publication Year\n2001,Unrelated Paper,2020\n",
    )
    .unwrap();

    let options = RunOptions {
        chart: false,
        export: true,
    };
    let summary = pipeline::run(&input, &config(dir.path()), options).unwrap();

    assert_eq!(summary.relevant_count, 0);
    assert!(summary.export_path.is_none());
    // No stray export file in the output directory.
    let leftovers = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains("Relevant_Papers"))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn missing_input_aborts_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");

    let err = pipeline::run(&missing, &config(dir.path()), RunOptions::default()).unwrap_err();
    assert!(matches!(err, LoaderError::InputNotFound(_)));
}
