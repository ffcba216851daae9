//! Analysis Configuration Module
//! Keyword presets, JSON keyword overrides and output settings.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Methodology indicator looked for in every title.
pub const DEFAULT_METHOD_KEYWORD: &str = "scoping";

/// Current keyword list: sedation, MRI and social robot included, VR
/// excluded.
const UNIFIED_KEYWORDS: &[&str] = &[
    "preparation",
    "prepare",
    "mock",
    "simulation",
    "robot",
    "social robot",
    "sedation",
    "mri",
    "magnetic resonance",
    "anesthesia",
    "anxiety",
    "distress",
    "child life",
];

/// Earlier radiology-oriented list with virtual reality terms.
const RADIOLOGY_KEYWORDS: &[&str] = &[
    "preparation",
    "prepare",
    "mock",
    "simulation",
    "virtual",
    "vr",
    "robot",
    "sedation",
    "anesthesia",
    "anxiety",
    "distress",
    "child life",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read keyword file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse keyword file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("keyword file defines no topic keywords")]
    EmptyKeywords,
}

/// Built-in topic keyword variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KeywordPreset {
    #[default]
    Unified,
    Radiology,
}

impl KeywordPreset {
    pub fn topic_keywords(&self) -> Vec<String> {
        let keywords = match self {
            KeywordPreset::Unified => UNIFIED_KEYWORDS,
            KeywordPreset::Radiology => RADIOLOGY_KEYWORDS,
        };
        keywords.iter().map(|k| k.to_string()).collect()
    }
}

/// On-disk keyword override format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordFile {
    pub topic_keywords: Vec<String>,
    #[serde(default = "default_method_keyword")]
    pub method_keyword: String,
}

fn default_method_keyword() -> String {
    DEFAULT_METHOD_KEYWORD.to_string()
}

/// Settings for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Journal or source name, used in the chart title and output
    /// filenames.
    pub source_name: String,
    pub topic_keywords: Vec<String>,
    pub method_keyword: String,
    pub out_dir: PathBuf,
}

impl AnalysisConfig {
    pub fn new(source_name: impl Into<String>, preset: KeywordPreset) -> Self {
        Self {
            source_name: source_name.into(),
            topic_keywords: preset.topic_keywords(),
            method_keyword: DEFAULT_METHOD_KEYWORD.to_string(),
            out_dir: PathBuf::from("."),
        }
    }

    /// Source name with spaces replaced for use in filenames.
    pub fn source_code(&self) -> String {
        self.source_name.replace(' ', "_")
    }

    /// Replace the keyword lists with the contents of a JSON file.
    pub fn apply_keyword_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = fs::read_to_string(path)?;
        let file: KeywordFile = serde_json::from_str(&text)?;
        if file.topic_keywords.is_empty() {
            return Err(ConfigError::EmptyKeywords);
        }
        self.topic_keywords = file.topic_keywords;
        self.method_keyword = file.method_keyword;
        Ok(())
    }
}
