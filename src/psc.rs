//! Product and Service Code (PSC) category names.
//!
//! The aggregator groups raw PSC codes into prefixes; this table turns those
//! prefixes into display names. A table is hand-maintained data, versioned in
//! its header, and is always handed to the aggregator rather than looked up
//! globally.
//!
//! File format (tab separated):
//!
//! ```text
//! # version: 2024.1
//! AN	Medical R&D
//! Q	Medical Services
//! 65	Medical, Dental, and Veterinary Equipment and Supplies
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

mod bundled {
    include!(concat!(env!("OUT_DIR"), "/psc_categories.rs"));
}

#[derive(Error, Debug)]
pub enum NameTableError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: expected <prefix><TAB><name>, got {content:?}")]
    Malformed { line: usize, content: String },

    #[error("line {line}: duplicate prefix {prefix:?}")]
    Duplicate { line: usize, prefix: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNameTable {
    version: String,
    names: HashMap<String, String>,
}

impl CategoryNameTable {
    /// The table compiled into the binary from `data/psc_categories.tsv`.
    pub fn bundled() -> Self {
        Self {
            version: bundled::PSC_TABLE_VERSION.to_string(),
            names: bundled::PSC_CATEGORIES
                .entries()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn from_pairs<I, K, V>(version: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            version: version.to_string(),
            names: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn from_tsv(text: &str) -> Result<Self, NameTableError> {
        let mut version = String::from("unversioned");
        let mut names = HashMap::new();

        for (idx, raw) in text.lines().enumerate() {
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

            let (prefix, name) = match raw.split_once('\t') {
                Some((p, n)) if !p.trim().is_empty() && !n.trim().is_empty() => {
                    (p.trim(), n.trim())
                }
                _ => {
                    return Err(NameTableError::Malformed {
                        line: idx + 1,
                        content: raw.to_string(),
                    })
                }
            };

            if names
                .insert(prefix.to_string(), name.to_string())
                .is_some()
            {
                return Err(NameTableError::Duplicate {
                    line: idx + 1,
                    prefix: prefix.to_string(),
                });
            }
        }

        Ok(Self { version, names })
    }

    pub fn from_path(path: &Path) -> Result<Self, NameTableError> {
        let text = fs::read_to_string(path).map_err(|source| NameTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_tsv(&text)?;
        tracing::info!(
            path = %path.display(),
            version = %table.version,
            entries = table.len(),
            "Loaded PSC name table"
        );
        Ok(table)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
