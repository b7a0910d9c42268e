//! Build script to generate the bundled PSC category name table.
//!
//! This reads `data/psc_categories.tsv` and generates a Rust file with a
//! phf::Map mapping category prefixes to display names, plus the table version.

use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const TABLE_PATH: &str = "data/psc_categories.tsv";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("psc_categories.rs");
    let mut file = BufWriter::new(File::create(&dest_path).unwrap());

    let source = fs::read_to_string(TABLE_PATH).unwrap();

    let mut version = String::from("unversioned");
    let mut entries: Vec<(String, String)> = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            if let Some(v) = comment.trim().strip_prefix("version:") {
                version = v.trim().to_string();
            }
            continue;
        }

        let (prefix, name) = raw
            .split_once('\t')
            .unwrap_or_else(|| panic!("{}:{}: expected <prefix>\\t<name>", TABLE_PATH, idx + 1));
        let prefix = prefix.trim();
        let name = name.trim();

        if entries.iter().any(|(p, _)| p == prefix) {
            panic!("{}:{}: duplicate prefix {:?}", TABLE_PATH, idx + 1, prefix);
        }
        entries.push((prefix.to_string(), name.to_string()));
    }

    // Sort for deterministic output
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    writeln!(
        file,
        "/// Auto-generated map of PSC category prefixes to display names."
    )
    .unwrap();
    writeln!(file, "/// Generated from {} entries.", entries.len()).unwrap();

    let mut map = phf_codegen::Map::new();
    for (prefix, name) in &entries {
        map.entry(prefix.as_str(), &format!("{:?}", name));
    }

    writeln!(
        file,
        "pub static PSC_CATEGORIES: phf::Map<&'static str, &'static str> = {};",
        map.build()
    )
    .unwrap();
    writeln!(
        file,
        "pub static PSC_TABLE_VERSION: &str = {:?};",
        version
    )
    .unwrap();

    // Tell Cargo to rerun if the table changes
    println!("cargo:rerun-if-changed={}", TABLE_PATH);
}
