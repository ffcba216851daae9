//! Yearly Aggregation Module
//! Groups classified articles by publication year.

use std::collections::BTreeMap;

use super::classifier::Classification;
use crate::data::Dataset;

/// Counts for a single publication year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyStat {
    pub year: i32,
    pub total: u32,
    pub topic: u32,
    pub method: u32,
    pub intersection: u32,
}

impl YearlyStat {
    fn new(year: i32) -> Self {
        Self {
            year,
            total: 0,
            topic: 0,
            method: 0,
            intersection: 0,
        }
    }
}

/// Aggregation result: one stat per distinct year present, ascending.
/// Years with no records are omitted, never synthesized with zeros.
#[derive(Debug, Clone, Default)]
pub struct YearlyBreakdown {
    pub stats: Vec<YearlyStat>,
    /// Articles excluded because their publication year was missing or
    /// unparseable.
    pub skipped_no_year: usize,
}

/// Count articles per year, splitting each year's total across the
/// three classification flags. `flags` must be index-aligned with the
/// dataset's articles.
pub fn aggregate_by_year(dataset: &Dataset, flags: &[Classification]) -> YearlyBreakdown {
    debug_assert_eq!(dataset.len(), flags.len());

    let mut buckets: BTreeMap<i32, YearlyStat> = BTreeMap::new();
    let mut skipped_no_year = 0;

    for (article, flag) in dataset.articles.iter().zip(flags) {
        let Some(year) = article.year else {
            skipped_no_year += 1;
            continue;
        };

        let entry = buckets.entry(year).or_insert_with(|| YearlyStat::new(year));
        entry.total += 1;
        if flag.is_topic {
            entry.topic += 1;
        }
        if flag.is_method {
            entry.method += 1;
        }
        if flag.is_intersection {
            entry.intersection += 1;
        }
    }

    YearlyBreakdown {
        stats: buckets.into_values().collect(),
        skipped_no_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Article;

    fn article(year: Option<i32>) -> Article {
        Article {
            pmid: None,
            title: None,
            year,
            fields: Vec::new(),
        }
    }

    fn flag(is_topic: bool, is_method: bool) -> Classification {
        Classification {
            is_topic,
            is_method,
            is_intersection: is_topic && is_method,
        }
    }

    fn dataset(years: &[Option<i32>]) -> Dataset {
        Dataset {
            columns: Vec::new(),
            articles: years.iter().map(|y| article(*y)).collect(),
        }
    }

    #[test]
    fn groups_by_year_ascending_and_omits_absent_years() {
        let data = dataset(&[Some(2019), Some(2019), Some(2021)]);
        let flags = vec![flag(true, false), flag(false, false), flag(true, false)];

        let breakdown = aggregate_by_year(&data, &flags);
        assert_eq!(breakdown.stats.len(), 2);

        let first = breakdown.stats[0];
        assert_eq!((first.year, first.total, first.topic), (2019, 2, 1));
        let second = breakdown.stats[1];
        assert_eq!((second.year, second.total, second.topic), (2021, 1, 1));

        // 2020 has no records and must not appear.
        assert!(!breakdown.stats.iter().any(|s| s.year == 2020));
    }

    #[test]
    fn missing_years_are_excluded_and_counted() {
        let data = dataset(&[Some(2019), None, None]);
        let flags = vec![flag(true, true); 3];

        let breakdown = aggregate_by_year(&data, &flags);
        assert_eq!(breakdown.skipped_no_year, 2);
        assert_eq!(breakdown.stats.len(), 1);
        assert_eq!(breakdown.stats[0].total, 1);
    }

    #[test]
    fn totals_sum_to_dataset_size() {
        let data = dataset(&[Some(2018), Some(2018), Some(2019), Some(2020), None]);
        let flags = vec![
            flag(true, true),
            flag(false, true),
            flag(true, false),
            flag(false, false),
            flag(true, true),
        ];

        let breakdown = aggregate_by_year(&data, &flags);
        let total: u32 = breakdown.stats.iter().map(|s| s.total).sum();
        assert_eq!(total as usize + breakdown.skipped_no_year, data.len());

        let topic: u32 = breakdown.stats.iter().map(|s| s.topic).sum();
        let method: u32 = breakdown.stats.iter().map(|s| s.method).sum();
        let intersection: u32 = breakdown.stats.iter().map(|s| s.intersection).sum();
        assert_eq!(topic, 2);
        assert_eq!(method, 2);
        assert_eq!(intersection, 1);
    }

    #[test]
    fn per_year_flag_counts_never_exceed_total() {
        let data = dataset(&[Some(2020), Some(2020), Some(2020)]);
        let flags = vec![flag(true, true), flag(true, false), flag(false, false)];

        let stat = aggregate_by_year(&data, &flags).stats[0];
        assert!(stat.topic <= stat.total);
        assert!(stat.method <= stat.total);
        assert!(stat.intersection <= stat.topic);
        assert!(stat.intersection <= stat.method);
    }
}
