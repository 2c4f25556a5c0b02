use crate::consts::{CATEGORY, MODE};
use crate::error::PfResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub phrase: String,
    pub frequency: usize,
    pub category: String,
    pub mode: String,
}

impl ExportRecord {
    pub fn new(phrase: String, frequency: usize) -> Self {
        Self {
            phrase,
            frequency,
            category: CATEGORY.to_string(),
            mode: MODE.to_string(),
        }
    }
}

/// Wraps ranked phrases into records, dropping any phrase whose character
/// length is `min_len` or shorter. Ranking order is preserved.
pub fn build_dataset(ranked: Vec<(String, usize)>, min_len: usize) -> Vec<ExportRecord> {
    ranked
        .into_iter()
        .filter(|(phrase, _)| phrase.chars().count() > min_len)
        .map(|(phrase, frequency)| ExportRecord::new(phrase, frequency))
        .collect()
}

/// Writes the dataset as a pretty-printed JSON array, creating missing parent
/// directories and replacing any existing file.
pub fn write_dataset<P: AsRef<Path>>(path: P, records: &[ExportRecord]) -> PfResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
