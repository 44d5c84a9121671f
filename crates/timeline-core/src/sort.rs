//! Result ordering.

use std::cmp::Ordering;

use timeline_model::{ResolvedInvestor, SortMode};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Order records by `mode`. Stable: equal keys keep their input order, and
/// [`SortMode::Default`] returns the input unchanged.
pub fn sort<'a>(
    mut records: Vec<&'a ResolvedInvestor>,
    mode: SortMode,
) -> Vec<&'a ResolvedInvestor> {
    match mode {
        SortMode::Default => {}
        SortMode::Name => {
            let mut keyed: Vec<(NameKey, &ResolvedInvestor)> = records
                .into_iter()
                .map(|record| (NameKey::new(&record.name), record))
                .collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            records = keyed.into_iter().map(|(_, record)| record).collect();
        }
        SortMode::Year => {
            records.sort_by(|a, b| compare_first_year(a.first_year(), b.first_year()));
        }
    }
    records
}

/// Undated records compare greater than any year.
fn compare_first_year(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Collation key for display names.
///
/// Compares accent- and case-insensitively first ("Émile" sorts with "emile"),
/// then by lower-cased form, then by the raw name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameKey {
    base: String,
    folded: String,
    raw: String,
}

impl NameKey {
    pub fn new(name: &str) -> Self {
        let folded = name.to_lowercase();
        let base = folded
            .nfd()
            .filter(|ch| !is_combining_mark(*ch))
            .collect();
        Self {
            base,
            folded,
            raw: name.to_string(),
        }
    }
}

/// Compare two display names the way the name sort does.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameKey::new(a).cmp(&NameKey::new(b))
}
