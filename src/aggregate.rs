//! Grouping of procurement category codes into chartable buckets.
//!
//! Codes are bucketed by prefix with three granularities:
//!
//! - two letters (`"AN12"` -> `"AN"`), the R&D categories
//! - one letter followed by a non-letter (`"R425"` -> `"R"`), service categories
//! - anything starting with a non-letter by its first two characters
//!   (`"6515"` -> `"65"`), product groups
//!
//! Prefixes the name table does not know are dropped from the output and
//! counted in [`DroppedSummary`].

use std::collections::HashMap;

use serde::Serialize;

use crate::models::sum_cents;
use crate::palette::{self, Color};
use crate::psc::CategoryNameTable;

/// Anything carrying a category code and an amount.
pub trait SpendingRecord {
    fn code(&self) -> &str;
    fn amount_cents(&self) -> i64;
}

impl<S: AsRef<str>> SpendingRecord for (S, i64) {
    fn code(&self) -> &str {
        self.0.as_ref()
    }

    fn amount_cents(&self) -> i64 {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBucket {
    pub key: String,
    pub name: String,
    pub amount_cents: i64,
    pub color_index: Option<usize>,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DroppedSummary {
    pub empty_code_records: usize,
    pub empty_code_cents: i64,
    pub unknown_key_records: usize,
    pub unknown_key_cents: i64,
    /// Unknown prefixes in first-seen order.
    pub unknown_keys: Vec<String>,
}

impl DroppedSummary {
    pub fn records(&self) -> usize {
        self.empty_code_records + self.unknown_key_records
    }

    pub fn cents(&self) -> i64 {
        self.empty_code_cents.saturating_add(self.unknown_key_cents)
    }

    pub fn is_empty(&self) -> bool {
        self.records() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    /// All known buckets, largest first.
    pub buckets: Vec<CategoryBucket>,
    pub dropped: DroppedSummary,
}

impl Aggregation {
    pub fn total_cents(&self) -> i64 {
        sum_cents(self.buckets.iter().map(|b| b.amount_cents))
    }

    pub fn into_top(mut self, n: usize) -> Vec<CategoryBucket> {
        self.buckets.truncate(n);
        self.buckets
    }
}

/// Bucket key for a category code, or `None` for an empty code.
pub fn bucket_key(code: &str) -> Option<&str> {
    let mut chars = code.chars();
    let c0 = chars.next()?;
    let c1 = chars.next();

    let len = match c1 {
        Some(c1) if c0.is_alphabetic() && c1.is_alphabetic() => 2,
        _ if c0.is_alphabetic() => 1,
        _ => 2,
    };
    Some(prefix(code, len))
}

/// The first `n` characters of `s` (all of `s` if it is shorter).
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Group records into named buckets, largest first, coloring the top `top_n`.
///
/// Ties keep the order in which their keys were first seen. The full list is
/// returned; callers truncate for display.
pub fn aggregate<R: SpendingRecord>(
    records: &[R],
    names: &CategoryNameTable,
    palette: &[Color],
    top_n: usize,
) -> Aggregation {
    let mut dropped = DroppedSummary::default();
    let mut totals: Vec<(String, i64, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let amount = record.amount_cents();
        let Some(key) = bucket_key(record.code()) else {
            dropped.empty_code_records += 1;
            dropped.empty_code_cents = dropped.empty_code_cents.saturating_add(amount);
            continue;
        };

        let slot = *index.entry(key.to_string()).or_insert_with(|| {
            totals.push((key.to_string(), 0, 0));
            totals.len() - 1
        });
        totals[slot].1 = totals[slot].1.saturating_add(amount);
        totals[slot].2 += 1;
    }

    let mut buckets = Vec::with_capacity(totals.len());
    for (key, amount_cents, count) in totals {
        match names.get(&key) {
            Some(name) => buckets.push(CategoryBucket {
                name: name.to_string(),
                key,
                amount_cents,
                color_index: None,
                color: None,
            }),
            None => {
                dropped.unknown_key_records += count;
                dropped.unknown_key_cents =
                    dropped.unknown_key_cents.saturating_add(amount_cents);
                dropped.unknown_keys.push(key);
            }
        }
    }

    // Vec::sort_by is stable, so equal amounts keep first-seen order.
    buckets.sort_by(|a, b| b.amount_cents.cmp(&a.amount_cents));

    for (position, bucket) in buckets.iter_mut().enumerate() {
        if let Some((idx, color)) = palette::slot(palette, position, top_n) {
            bucket.color_index = Some(idx);
            bucket.color = Some(color);
        }
    }

    if !dropped.is_empty() {
        tracing::debug!(
            records = dropped.records(),
            cents = dropped.cents(),
            unknown_keys = ?dropped.unknown_keys,
            table_version = names.version(),
            "Dropped category records without a known name"
        );
    }

    Aggregation { buckets, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PscSpending;
    use crate::palette::{Color, PSC};

    fn names() -> CategoryNameTable {
        CategoryNameTable::from_pairs(
            "test",
            [
                ("AN", "Medical R&D"),
                ("A", "Single Letter"),
                ("H", "Quality Control"),
                ("R", "Support Services"),
                ("Q", "Medical Services"),
                ("D", "IT Services"),
                ("V", "Transportation"),
                ("99", "Miscellaneous"),
                ("65", "Medical Equipment"),
                ("7", "Single Digit"),
            ],
        )
    }

    fn keys(agg: &Aggregation) -> Vec<&str> {
        agg.buckets.iter().map(|b| b.key.as_str()).collect()
    }

    #[test]
    fn test_bucket_key_rules() {
        assert_eq!(bucket_key("AN"), Some("AN"));
        assert_eq!(bucket_key("AN12"), Some("AN"));
        assert_eq!(bucket_key("A"), Some("A"));
        assert_eq!(bucket_key("R4"), Some("R"));
        assert_eq!(bucket_key("R425"), Some("R"));
        assert_eq!(bucket_key("H115"), Some("H"));
        assert_eq!(bucket_key("H220"), Some("H"));
        assert_eq!(bucket_key("99"), Some("99"));
        assert_eq!(bucket_key("6515"), Some("65"));
        assert_eq!(bucket_key("7"), Some("7"));
        assert_eq!(bucket_key("7A"), Some("7A"));
        assert_eq!(bucket_key(""), None);
    }

    #[test]
    fn test_r4_groups_into_single_letter_bucket() {
        let agg = aggregate(&[("R4", 100)], &names(), PSC, 8);
        assert_eq!(keys(&agg), vec!["R"]);
        assert_eq!(agg.buckets[0].amount_cents, 100);
    }

    #[test]
    fn test_sums_per_bucket_and_sorts_descending() {
        let records = [
            ("Q301", 500),
            ("AN11", 200),
            ("Q999", 700),
            ("6515", 300),
            ("AN13", 50),
            ("R425", 900),
        ];
        let agg = aggregate(&records, &names(), PSC, 8);

        assert_eq!(keys(&agg), vec!["Q", "R", "65", "AN"]);
        let amounts: Vec<i64> = agg.buckets.iter().map(|b| b.amount_cents).collect();
        assert_eq!(amounts, vec![1200, 900, 300, 250]);
        assert_eq!(agg.buckets[0].name, "Medical Services");
        assert!(agg.dropped.is_empty());
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let rows = [
            PscSpending {
                code: "Q1".into(),
                name: String::new(),
                amount: 1e17,
            },
            PscSpending {
                code: "Q2".into(),
                name: String::new(),
                amount: 1e17,
            },
            PscSpending {
                code: "ZZ1".into(),
                name: String::new(),
                amount: 1e17,
            },
            PscSpending {
                code: "ZZ2".into(),
                name: String::new(),
                amount: 1e17,
            },
        ];
        let agg = aggregate(&rows, &names(), PSC, 8);

        assert_eq!(keys(&agg), vec!["Q"]);
        assert_eq!(agg.buckets[0].amount_cents, i64::MAX);
        assert_eq!(agg.total_cents(), i64::MAX);
        assert_eq!(agg.dropped.unknown_key_cents, i64::MAX);
        assert!(agg.dropped.cents() > 0);
    }

    #[test]
    fn test_empty_code_excluded_and_counted() {
        let agg = aggregate(&[("", 1_000), ("Q1", 10)], &names(), PSC, 8);
        assert_eq!(agg.total_cents(), 10);
        assert_eq!(agg.dropped.empty_code_records, 1);
        assert_eq!(agg.dropped.empty_code_cents, 1_000);
    }

    #[test]
    fn test_unknown_key_dropped_and_counted() {
        let agg = aggregate(&[("ZZ12", 400), ("ZZ99", 100), ("D302", 5)], &names(), PSC, 8);
        assert_eq!(keys(&agg), vec!["D"]);
        assert_eq!(agg.total_cents(), 5);
        assert_eq!(agg.dropped.unknown_key_records, 2);
        assert_eq!(agg.dropped.unknown_key_cents, 500);
        assert_eq!(agg.dropped.unknown_keys, vec!["ZZ".to_string()]);
    }

    #[test]
    fn test_total_matches_resolvable_input() {
        let records = [
            ("AN", 10),
            ("A", 20),
            ("R4", 30),
            ("99", 40),
            ("7", 50),
            ("", 60),
            ("ZZ", 70),
            ("X1", 80),
        ];
        let table = names();
        let agg = aggregate(&records, &table, PSC, 8);

        let expected: i64 = records
            .iter()
            .filter(|r| bucket_key(r.0).is_some_and(|k| table.get(k).is_some()))
            .map(|r| r.1)
            .sum();
        assert_eq!(agg.total_cents(), expected);
        assert_eq!(agg.total_cents() + agg.dropped.cents(), 360);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let agg = aggregate(&[("V1", 100), ("D1", 100), ("Q1", 100)], &names(), PSC, 8);
        assert_eq!(keys(&agg), vec!["V", "D", "Q"]);
    }

    #[test]
    fn test_colors_only_top_n() {
        let letters = ["A", "B", "C", "D", "E", "F", "G", "H", "J", "K"];
        let table = CategoryNameTable::from_pairs("test", letters.iter().map(|l| (*l, *l)));
        let records: Vec<(String, i64)> = letters
            .iter()
            .enumerate()
            .map(|(i, l)| (format!("{l}1"), 1_000 - i as i64))
            .collect();

        let agg = aggregate(&records, &table, PSC, 8);
        assert_eq!(agg.buckets.len(), 10);
        for (i, bucket) in agg.buckets.iter().enumerate().take(8) {
            assert_eq!(bucket.color_index, Some(i));
            assert_eq!(bucket.color, Some(PSC[i]));
        }
        assert_eq!(agg.buckets[8].color, None);
        assert_eq!(agg.buckets[9].color_index, None);
    }

    #[test]
    fn test_short_palette_limits_colors() {
        let palette = [Color::Red, Color::Blue];
        let agg = aggregate(&[("Q1", 3), ("R1", 2), ("D1", 1)], &names(), &palette, 8);
        let colors: Vec<Option<Color>> = agg.buckets.iter().map(|b| b.color).collect();
        assert_eq!(colors, vec![Some(Color::Red), Some(Color::Blue), None]);
    }

    #[test]
    fn test_returns_full_list_beyond_top_n() {
        let agg = aggregate(&[("Q1", 3), ("R1", 2), ("D1", 1)], &names(), PSC, 1);
        assert_eq!(agg.buckets.len(), 3);
        assert!(agg.buckets[1].color.is_none());
        assert_eq!(agg.clone().into_top(2).len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let records = [("Q1", 3), ("AN1", 3), ("65", 9), ("", 1), ("ZZ", 2)];
        let first = aggregate(&records, &names(), PSC, 8);
        let second = aggregate(&records, &names(), PSC, 8);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let records: [(&str, i64); 0] = [];
        let agg = aggregate(&records, &names(), PSC, 8);
        assert!(agg.buckets.is_empty());
        assert!(agg.dropped.is_empty());
    }
}
