//! Keyword frequency extraction over report titles.
//!
//! Titles are lower-cased and split on whitespace; nothing else is normalized,
//! so punctuation stays attached to its token (`"xss!"` and `"xss"` are
//! different terms).

use crate::models::{Report, TermCount, TrendingList};
use itertools::Itertools;
use std::collections::HashMap;
use tracing::debug;

/// Count every title token, in order of first appearance.
pub fn count_terms(reports: &[Report]) -> Vec<TermCount> {
    let mut counts: Vec<TermCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for report in reports {
        let title = report.title.to_lowercase();
        for word in title.split_whitespace() {
            match index.get(word) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(word.to_string(), counts.len());
                    counts.push(TermCount::new(word, 1));
                }
            }
        }
    }
    counts
}

/// Rank title tokens by frequency and keep the `top_n` most common.
///
/// Ties keep the order in which terms were first seen. An empty report list
/// yields an empty ranking.
pub fn extract_trends(reports: &[Report], top_n: usize) -> TrendingList {
    let counts = count_terms(reports);
    let distinct = counts.len();

    let trending: TrendingList = counts
        .into_iter()
        .sorted_by(|a, b| b.count.cmp(&a.count))
        .take(top_n)
        .collect();

    debug!(reports = reports.len(), distinct, kept = trending.len(), "Extracted trends");
    trending
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reports(titles: &[&str]) -> Vec<Report> {
        titles
            .iter()
            .map(|t| Report {
                title: t.to_string(),
            })
            .collect()
    }

    fn count_of(list: &[TermCount], term: &str) -> Option<usize> {
        list.iter().find(|tc| tc.term == term).map(|tc| tc.count)
    }

    #[test]
    fn test_count_terms() {
        let counts = count_terms(&reports(&[
            "SQL Injection Found",
            "sql injection retest",
            "XSS bug",
        ]));

        assert_eq!(counts.len(), 6);
        assert_eq!(count_of(&counts, "sql"), Some(2));
        assert_eq!(count_of(&counts, "injection"), Some(2));
        assert_eq!(count_of(&counts, "xss"), Some(1));
        assert_eq!(count_of(&counts, "found"), Some(1));
        assert_eq!(count_of(&counts, "retest"), Some(1));
        assert_eq!(count_of(&counts, "bug"), Some(1));
    }

    #[test]
    fn test_extract_trends_ranking() {
        let trending = extract_trends(
            &reports(&["SQL Injection Found", "sql injection retest", "XSS bug"]),
            10,
        );

        assert_eq!(trending.len(), 6);
        assert_eq!(trending[0], TermCount::new("sql", 2));
        assert_eq!(trending[1], TermCount::new("injection", 2));
        // count-1 terms keep discovery order
        let rest: Vec<&str> = trending[2..].iter().map(|tc| tc.term.as_str()).collect();
        assert_eq!(rest, vec!["found", "retest", "xss", "bug"]);
    }

    #[test]
    fn test_extract_trends_sorted_descending() {
        let trending = extract_trends(&reports(&["a b c", "b c", "c", "d d d d"]), 10);
        let counts: Vec<usize> = trending.iter().map(|tc| tc.count).collect();
        assert_eq!(counts, vec![4, 3, 2, 1]);
        assert_eq!(trending[0].term, "d");
    }

    #[test]
    fn test_extract_trends_top_n_limit() {
        let titles: Vec<String> = (0..15).map(|i| format!("term{i}")).collect();
        let titles: Vec<&str> = titles.iter().map(String::as_str).collect();

        let trending = extract_trends(&reports(&titles), 10);
        assert_eq!(trending.len(), 10);
        assert_eq!(trending[0].term, "term0");
        assert_eq!(trending[9].term, "term9");
    }

    #[test]
    fn test_extract_trends_empty() {
        assert!(extract_trends(&[], 10).is_empty());
    }

    #[test]
    fn test_punctuation_is_kept() {
        let counts = count_terms(&reports(&["XSS! in search", "xss in profile"]));
        assert_eq!(count_of(&counts, "xss!"), Some(1));
        assert_eq!(count_of(&counts, "xss"), Some(1));
        assert_eq!(count_of(&counts, "in"), Some(2));
    }

    #[test]
    fn test_whitespace_variants() {
        let counts = count_terms(&reports(&["  open\tredirect\n", ""]));
        assert_eq!(counts, vec![TermCount::new("open", 1), TermCount::new("redirect", 1)]);
    }
}
