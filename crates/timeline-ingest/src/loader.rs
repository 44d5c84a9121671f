//! Dataset and group-table loading.

use std::path::Path;

use serde_json::Value;
use timeline_model::{GroupTable, InvestorRecord};
use tracing::{info, warn};

use crate::error::{IngestError, Result};
use crate::lenient::parse_lenient;

const SAMPLE_JSON: &str = include_str!("../data/sample.json");

/// Load an investor dataset from a JSON file.
///
/// Trailing commas are tolerated. A top level other than an array yields an
/// empty dataset; entries that are not objects become empty records.
pub fn load_investors(path: &Path) -> Result<Vec<InvestorRecord>> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let value = parse_file(path, &text)?;
    let records = records_from_value(&value);
    info!(path = %path.display(), records = records.len(), "loaded investors");
    Ok(records)
}

/// Parse an investor dataset from JSON text.
pub fn parse_investors(text: &str) -> std::result::Result<Vec<InvestorRecord>, serde_json::Error> {
    let (value, cleaned) = parse_lenient(text)?;
    if cleaned {
        warn!("JSON cleaned due to trailing commas");
    }
    Ok(records_from_value(&value))
}

/// Load a group table: a JSON object of group key to tag list.
pub fn load_group_table(path: &Path) -> Result<GroupTable> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let value = parse_file(path, &text)?;
    let table = GroupTable::from_json(&value).map_err(|source| IngestError::GroupTable {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), groups = table.len(), "loaded group table");
    Ok(table)
}

/// The built-in dataset used when no data file is given.
pub fn embedded_sample() -> Result<Vec<InvestorRecord>> {
    let value: Value = serde_json::from_str(SAMPLE_JSON).map_err(IngestError::Sample)?;
    Ok(records_from_value(&value))
}

fn parse_file(path: &Path, text: &str) -> Result<Value> {
    let (value, cleaned) = parse_lenient(text).map_err(|e| IngestError::json(path, e))?;
    if cleaned {
        warn!(path = %path.display(), "JSON cleaned due to trailing commas");
    }
    Ok(value)
}

fn records_from_value(value: &Value) -> Vec<InvestorRecord> {
    match value {
        Value::Array(entries) => entries.iter().map(InvestorRecord::from_value).collect(),
        _ => {
            warn!("dataset top level is not an array; using no records");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_four_investors() {
        let sample = embedded_sample().unwrap();
        let ids: Vec<_> = sample.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["buffett", "soros", "simons", "lynch"]);
        assert!(sample.iter().all(|record| !record.timeline.is_empty()));
    }

    #[test]
    fn non_array_top_level_is_empty() {
        assert!(parse_investors(r#"{"id": "buffett"}"#).unwrap().is_empty());
        assert!(parse_investors("null").unwrap().is_empty());
    }

    #[test]
    fn trailing_commas_are_tolerated() {
        let records = parse_investors(r#"[{"id": "soros", "tags": ["macro",],},]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tags, vec!["macro"]);
    }

    #[test]
    fn broken_json_is_an_error() {
        assert!(parse_investors("[{").is_err());
    }
}
