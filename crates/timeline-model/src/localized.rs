//! Multi-language field values.
//!
//! A stored field is either a mapping from language code to value, a plain
//! value that is already language-neutral, or missing. Anything else is kept
//! as [`Localized::Malformed`] so a single bad field never fails the record.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Values that can be carried by a localized field.
///
/// `has_content` decides whether a language entry counts during fallback:
/// empty strings and empty lists are skipped.
pub trait FieldValue: Clone + Default {
    fn has_content(&self) -> bool;
}

impl FieldValue for String {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Clone> FieldValue for Vec<T> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

/// A field as stored in the raw dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Localized<T> {
    /// Language code to value, in stored key order. Entries whose value has
    /// the wrong shape are kept as `None`.
    ByLang(IndexMap<String, Option<T>>),
    /// A value that was never split by language.
    Plain(T),
    /// JSON `null` or an absent key.
    Missing,
    /// Any other shape (numbers, booleans, mismatched arrays).
    Malformed(Value),
}

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T: FieldValue> Localized<T> {
    /// Build a language map from `(lang, value)` pairs, keeping their order.
    pub fn by_lang<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Self::ByLang(
            entries
                .into_iter()
                .map(|(lang, value)| (lang.into(), Some(value)))
                .collect(),
        )
    }

    /// The value stored for `lang`, if that entry carries content.
    pub fn get(&self, lang: &str) -> Option<&T> {
        match self {
            Self::ByLang(map) => map
                .get(lang)
                .and_then(Option::as_ref)
                .filter(|value| value.has_content()),
            _ => None,
        }
    }

    /// The first entry in stored order that carries content.
    pub fn first_with_content(&self) -> Option<&T> {
        match self {
            Self::ByLang(map) => map
                .values()
                .filter_map(Option::as_ref)
                .find(|value| value.has_content()),
            _ => None,
        }
    }

    /// Language codes present on the field, in stored order.
    pub fn languages(&self) -> Vec<&str> {
        match self {
            Self::ByLang(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::ByLang(_))
    }
}

impl<T: DeserializeOwned> Localized<T> {
    /// Classify an untyped JSON value. Never fails.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Object(map) => Self::ByLang(
                map.into_iter()
                    .map(|(lang, entry)| (lang, serde_json::from_value(entry).ok()))
                    .collect(),
            ),
            other => match serde_json::from_value::<T>(other.clone()) {
                Ok(plain) => Self::Plain(plain),
                Err(_) => Self::Malformed(other),
            },
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Localized<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}
