//! Typed article records built from the raw CSV rows.

/// One bibliographic record. The typed fields drive dedup, classification
/// and aggregation; `fields` keeps the full row (original column order,
/// rendered as strings) so exports can pass every column through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub pmid: Option<String>,
    pub title: Option<String>,
    pub year: Option<i32>,
    pub fields: Vec<String>,
}

/// An ordered set of articles together with the source header.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names in original order.
    pub columns: Vec<String>,
    pub articles: Vec<Article>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
