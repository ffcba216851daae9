//! Deduplication Module
//! Removes duplicate records by identifier, then by title.

use std::collections::HashSet;

use super::record::{Article, Dataset};

/// Record counts before and after each dedup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupReport {
    pub initial: usize,
    pub after_pmid: usize,
    pub after_title: usize,
}

impl DedupReport {
    pub fn removed(&self) -> usize {
        self.initial - self.after_title
    }
}

/// Drop duplicate articles in two sequential passes: first by PMID
/// (keep first occurrence in row order), then by exact title on the
/// survivors. A record eliminated by the PMID pass never reaches the
/// title pass.
///
/// Articles without a PMID all survive the first pass; the title pass
/// still collapses genuine duplicates among them. Titles are compared
/// case- and whitespace-sensitively, unlike the classifier's matching.
pub fn dedup(dataset: Dataset) -> (Dataset, DedupReport) {
    let Dataset { columns, articles } = dataset;
    let initial = articles.len();

    let mut seen_pmids: HashSet<String> = HashSet::new();
    let survivors: Vec<Article> = articles
        .into_iter()
        .filter(|article| match &article.pmid {
            Some(pmid) => seen_pmids.insert(pmid.clone()),
            None => true,
        })
        .collect();
    let after_pmid = survivors.len();

    let mut seen_titles: HashSet<String> = HashSet::new();
    let survivors: Vec<Article> = survivors
        .into_iter()
        .filter(|article| match &article.title {
            Some(title) => seen_titles.insert(title.clone()),
            None => true,
        })
        .collect();
    let after_title = survivors.len();

    (
        Dataset {
            columns,
            articles: survivors,
        },
        DedupReport {
            initial,
            after_pmid,
            after_title,
        },
    )
}
