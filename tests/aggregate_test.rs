//! Category aggregation against the bundled PSC name table.

use govspend::aggregate::{aggregate, bucket_key};
use govspend::palette::{self, Color};
use govspend::psc::CategoryNameTable;

fn records() -> Vec<(&'static str, i64)> {
    vec![
        ("H115", 1_000),
        ("H220", 500),
        ("AN11", 2_500),
        ("AN", 100),
        ("R425", 4_000),
        ("R4", 50),
        ("6515", 750),
        ("99", 10),
        ("ZZ01", 9_999),
        ("", 123),
    ]
}

#[test]
fn test_prefix_rule_examples() {
    assert_eq!(bucket_key("H115"), Some("H"));
    assert_eq!(bucket_key("H220"), Some("H"));
    assert_eq!(bucket_key("AN"), Some("AN"));
    assert_eq!(bucket_key("A"), Some("A"));
    assert_eq!(bucket_key("R4"), Some("R"));
    assert_eq!(bucket_key("99"), Some("99"));
    assert_eq!(bucket_key("7"), Some("7"));
    assert_eq!(bucket_key(""), None);
}

#[test]
fn test_bundled_table_totals() {
    let names = CategoryNameTable::bundled();
    let result = aggregate(&records(), &names, palette::PSC, 8);

    let keys: Vec<&str> = result.buckets.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["R", "AN", "H", "65", "99"]);
    assert_eq!(result.buckets[0].amount_cents, 4_050);
    assert_eq!(result.buckets[2].amount_cents, 1_500);

    // Everything except the unknown prefix and the empty code.
    let input_total: i64 = records().iter().map(|(_, amount)| amount).sum();
    assert_eq!(result.total_cents(), input_total - 9_999 - 123);
    assert_eq!(result.dropped.unknown_keys, vec!["ZZ".to_string()]);
    assert_eq!(result.dropped.cents(), 9_999 + 123);

    assert!(result
        .buckets
        .windows(2)
        .all(|pair| pair[0].amount_cents >= pair[1].amount_cents));
}

#[test]
fn test_top_eight_of_ten_get_colors() {
    let names = CategoryNameTable::from_pairs(
        "test",
        (10..20).map(|n| (n.to_string(), format!("Group {}", n))),
    );
    let rows: Vec<(String, i64)> = (10..20)
        .map(|n| (format!("{}00", n), 1_000 - n as i64))
        .collect();

    let result = aggregate(&rows, &names, palette::PSC, 8);
    assert_eq!(result.buckets.len(), 10);

    let colors: Vec<Option<Color>> = result.buckets.iter().map(|b| b.color).collect();
    let expected: Vec<Option<Color>> = palette::PSC
        .iter()
        .copied()
        .map(Some)
        .chain([None, None])
        .collect();
    assert_eq!(colors, expected);
    assert_eq!(result.buckets[7].color_index, Some(7));
    assert_eq!(result.buckets[8].color_index, None);
}

#[test]
fn test_aggregation_is_idempotent() {
    let names = CategoryNameTable::bundled();
    let first = aggregate(&records(), &names, palette::PSC, 3);
    let second = aggregate(&records(), &names, palette::PSC, 3);
    assert_eq!(first, second);
}
