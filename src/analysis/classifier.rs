//! Title Classifier Module
//! Labels each article along two boolean axes: topic relevance and
//! review methodology.

use crate::data::Dataset;

/// Per-article classification flags. Derived from the title alone,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_topic: bool,
    pub is_method: bool,
    pub is_intersection: bool,
}

/// Matches titles against a configured keyword list. Matching is a
/// case-insensitive substring check with no word-boundary awareness,
/// so "vr" matches inside any longer word containing it.
pub struct Classifier {
    topic_keywords: Vec<String>,
    method_keyword: String,
}

impl Classifier {
    pub fn new(topic_keywords: &[String], method_keyword: &str) -> Self {
        Self {
            topic_keywords: topic_keywords.iter().map(|k| k.to_lowercase()).collect(),
            method_keyword: method_keyword.to_lowercase(),
        }
    }

    /// Classify a single title. A missing title behaves as the empty
    /// string and matches nothing; this function never fails.
    pub fn classify(&self, title: Option<&str>) -> Classification {
        let title = title.unwrap_or("").to_lowercase();
        let is_topic = self
            .topic_keywords
            .iter()
            .any(|keyword| title.contains(keyword.as_str()));
        let is_method = title.contains(self.method_keyword.as_str());

        Classification {
            is_topic,
            is_method,
            is_intersection: is_topic && is_method,
        }
    }

    /// Classify every article in the dataset, in order.
    pub fn classify_all(&self, dataset: &Dataset) -> Vec<Classification> {
        dataset
            .articles
            .iter()
            .map(|article| self.classify(article.title.as_deref()))
            .collect()
    }
}
