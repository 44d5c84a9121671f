//! Style-group taxonomy.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};

/// Group key that clears every group and tag selection.
pub const ALL_GROUP: &str = "all";

/// Mapping from style-group key to the tags it stands for, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupTable {
    groups: IndexMap<String, Vec<String>>,
}

const DEFAULT_GROUPS: &[(&str, &[&str])] = &[
    (ALL_GROUP, &[]),
    ("value", &["value"]),
    ("macro", &["macro"]),
    ("quant", &["quant"]),
    ("activist", &["activist"]),
    ("index", &["index", "passive"]),
    ("theme", &["theme", "growth", "commodities"]),
    ("bond", &["bond", "fixed-income"]),
    ("commodities", &["commodities"]),
    ("trend", &["trend"]),
    ("event", &["event"]),
    ("arb", &["arbitrage"]),
    ("endowment", &["endowment"]),
    ("special", &["special"]),
    ("qualitative", &["discretionary"]),
    ("cta", &["cta"]),
    ("risk_parity", &["risk-parity"]),
];

impl GroupTable {
    pub fn new<I, K, T>(groups: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<T>)>,
        K: Into<String>,
        T: Into<String>,
    {
        Self {
            groups: groups
                .into_iter()
                .map(|(key, tags)| (key.into(), tags.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Parse a JSON object of `group -> [tag, ...]`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidGroupTable`] when the value is not an
    /// object or a group does not map to a list of strings.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ModelError::InvalidGroupTable(
                "expected a JSON object of group -> tags".to_string(),
            ));
        };
        let mut groups = IndexMap::new();
        for (key, tags) in map {
            let tags: Vec<String> = serde_json::from_value(tags.clone()).map_err(|error| {
                ModelError::InvalidGroupTable(format!("group {key}: {error}"))
            })?;
            groups.insert(key.clone(), tags);
        }
        Ok(Self { groups })
    }

    /// Tags for a group key; unknown keys have none.
    pub fn tags_for(&self, key: &str) -> &[String] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.groups.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(key, tags)| (key.as_str(), tags.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_GROUPS
                .iter()
                .map(|(key, tags)| (*key, tags.to_vec())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_table_starts_with_all() {
        let table = GroupTable::default();
        assert_eq!(table.keys().next(), Some(ALL_GROUP));
        assert!(table.tags_for(ALL_GROUP).is_empty());
        assert_eq!(table.tags_for("index"), ["index", "passive"]);
        assert_eq!(table.len(), 17);
    }

    #[test]
    fn unknown_group_has_no_tags() {
        assert!(GroupTable::default().tags_for("crypto").is_empty());
    }

    #[test]
    fn from_json_rejects_bad_shapes() {
        assert!(GroupTable::from_json(&json!(["value"])).is_err());
        assert!(GroupTable::from_json(&json!({"value": "value"})).is_err());
        let table =
            GroupTable::from_json(&json!({"all": [], "deep": ["value", "special"]})).unwrap();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["all", "deep"]);
    }
}
