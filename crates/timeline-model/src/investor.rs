//! Raw and resolved investor records.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::localized::Localized;

/// List-typed fields (`works`, `quotes`, `lessons`, `links`, `cases`) hold
/// strings or objects; their items are carried through untouched.
pub type ListItem = Value;

/// Region used when neither the record nor the lookup table names one.
pub const DEFAULT_REGION: &str = "global";

/// A timeline event as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    /// Only integral JSON numbers are accepted; anything else is `None`.
    #[serde(deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    pub text: Localized<String>,
}

/// An investor record exactly as stored in the dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestorRecord {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub name: Localized<String>,
    pub summary: Localized<String>,
    pub theory: Localized<String>,
    pub strategy: Localized<String>,
    pub wins: Localized<String>,
    pub works: Localized<Vec<ListItem>>,
    pub quotes: Localized<Vec<ListItem>>,
    pub lessons: Localized<Vec<ListItem>>,
    pub links: Localized<Vec<ListItem>>,
    pub cases: Localized<Vec<ListItem>>,
    #[serde(deserialize_with = "lenient_events")]
    pub timeline: Vec<RawEvent>,
    #[serde(deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_region")]
    pub region: Option<String>,
}

impl InvestorRecord {
    /// Read a record from an untyped JSON value.
    ///
    /// Non-object values produce a default record with an empty id; the
    /// record is never dropped.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }
}

/// A timeline event resolved to one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEvent {
    pub year: Option<i32>,
    pub text: String,
}

impl ResolvedEvent {
    pub fn new(year: i32, text: impl Into<String>) -> Self {
        Self {
            year: Some(year),
            text: text.into(),
        }
    }
}

/// An investor record with every localized field resolved to one language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInvestor {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub theory: String,
    pub strategy: String,
    pub wins: String,
    pub works: Vec<ListItem>,
    pub quotes: Vec<ListItem>,
    pub lessons: Vec<ListItem>,
    pub links: Vec<ListItem>,
    pub cases: Vec<ListItem>,
    pub timeline: Vec<ResolvedEvent>,
    pub tags: Vec<String>,
    pub region: String,
}

impl ResolvedInvestor {
    /// Numeric years of the timeline, in stored order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.timeline.iter().filter_map(|event| event.year)
    }

    /// Earliest numeric timeline year.
    pub fn first_year(&self) -> Option<i32> {
        self.years().min()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Fields searched by the free-text filter.
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            &self.name,
            &self.summary,
            &self.theory,
            &self.strategy,
            &self.wins,
        ]
    }
}

fn lenient_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(year_from_value(&value))
}

/// Integral JSON numbers that fit in `i32`; strings do not count as years.
pub fn year_from_value(value: &Value) -> Option<i32> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(int) = number.as_i64() {
        return i32::try_from(int).ok();
    }
    let float = number.as_f64()?;
    let in_range = float >= f64::from(i32::MIN) && float <= f64::from(i32::MAX);
    (float.fract() == 0.0 && in_range).then_some(float as i32)
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(id) => id,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

fn lenient_events<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<RawEvent>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .iter()
        .map(|entry| {
            if entry.is_object() {
                RawEvent::deserialize(entry).unwrap_or_default()
            } else {
                RawEvent::default()
            }
        })
        .collect())
}

fn lenient_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(tag) => Some(tag),
            _ => None,
        })
        .collect())
}

fn lenient_region<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(region) if !region.is_empty() => Some(region),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_fields_fall_back_to_defaults() {
        let record = InvestorRecord::from_value(&json!({
            "id": "soros",
            "name": {"en": "George Soros"},
            "timeline": "not a list",
            "tags": ["macro", 7, "reflexivity"],
            "region": 12
        }));
        assert_eq!(record.id, "soros");
        assert!(record.timeline.is_empty());
        assert_eq!(record.tags, vec!["macro", "reflexivity"]);
        assert_eq!(record.region, None);
    }

    #[test]
    fn non_numeric_years_are_kept_as_none() {
        let record = InvestorRecord::from_value(&json!({
            "id": "lynch",
            "timeline": [
                {"year": 1977, "text": {"en": "Took over Magellan"}},
                {"year": "1990", "text": {"en": "One Up on Wall Street"}},
                {"text": {"en": "Undated"}},
                42
            ]
        }));
        let years: Vec<_> = record.timeline.iter().map(|event| event.year).collect();
        assert_eq!(years, vec![Some(1977), None, None, None]);
    }

    #[test]
    fn non_object_record_becomes_default() {
        assert_eq!(InvestorRecord::from_value(&json!(17)), InvestorRecord::default());
        assert_eq!(InvestorRecord::from_value(&json!(["a"])).id, "");
    }

    #[test]
    fn integral_float_years_are_accepted() {
        assert_eq!(year_from_value(&json!(1988.0)), Some(1988));
        assert_eq!(year_from_value(&json!(1988.5)), None);
        assert_eq!(year_from_value(&json!(null)), None);
    }

    #[test]
    fn first_year_ignores_missing_years() {
        let investor = ResolvedInvestor {
            timeline: vec![
                ResolvedEvent::new(2016, "Apple"),
                ResolvedEvent {
                    year: None,
                    text: "undated".to_string(),
                },
                ResolvedEvent::new(1965, "Berkshire"),
            ],
            ..ResolvedInvestor::default()
        };
        assert_eq!(investor.first_year(), Some(1965));
    }
}
