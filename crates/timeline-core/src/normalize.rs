//! Raw dataset to resolved records.
//!
//! Every input record yields exactly one output record. Missing or malformed
//! fields become empty values, tags default to an empty list and the region
//! comes from the static lookup only when the record does not set one.

use std::collections::BTreeSet;

use serde_json::Value;
use timeline_model::{InvestorRecord, ResolvedEvent, ResolvedInvestor};
use tracing::{debug, warn};

use crate::locale::resolve;
use crate::region::region_for;

/// Resolve a whole dataset for `lang`.
pub fn normalize(raw: &[InvestorRecord], lang: &str) -> Vec<ResolvedInvestor> {
    let resolved: Vec<ResolvedInvestor> = raw
        .iter()
        .map(|record| normalize_record(record, lang))
        .collect();
    debug!(lang, records = resolved.len(), "normalized dataset");
    resolved
}

/// Resolve one record for `lang`.
pub fn normalize_record(record: &InvestorRecord, lang: &str) -> ResolvedInvestor {
    let region = match &record.region {
        Some(region) => region.clone(),
        None => region_for(&record.id).to_string(),
    };
    ResolvedInvestor {
        id: record.id.clone(),
        name: resolve(&record.name, lang),
        summary: resolve(&record.summary, lang),
        theory: resolve(&record.theory, lang),
        strategy: resolve(&record.strategy, lang),
        wins: resolve(&record.wins, lang),
        works: resolve(&record.works, lang),
        quotes: resolve(&record.quotes, lang),
        lessons: resolve(&record.lessons, lang),
        links: resolve(&record.links, lang),
        cases: resolve(&record.cases, lang),
        timeline: record
            .timeline
            .iter()
            .map(|event| ResolvedEvent {
                year: event.year,
                text: resolve(&event.text, lang),
            })
            .collect(),
        tags: record.tags.clone(),
        region,
    }
}

/// Resolve an untyped JSON dataset. Anything but an array yields no records.
pub fn normalize_value(raw: &Value, lang: &str) -> Vec<ResolvedInvestor> {
    let Value::Array(entries) = raw else {
        warn!(lang, "dataset is not a JSON array; rendering no records");
        return Vec::new();
    };
    let records: Vec<InvestorRecord> = entries.iter().map(InvestorRecord::from_value).collect();
    normalize(&records, lang)
}

/// Sorted, de-duplicated tag vocabulary of a dataset.
pub fn collect_tags(records: &[ResolvedInvestor]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Smallest and largest numeric timeline year across a dataset.
pub fn year_bounds(records: &[ResolvedInvestor]) -> Option<(i32, i32)> {
    let mut years = records.iter().flat_map(ResolvedInvestor::years);
    let first = years.next()?;
    Some(years.fold((first, first), |(lo, hi), year| (lo.min(year), hi.max(year))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_every_field() {
        let raw = json!([{
            "id": "soros",
            "name": {"zh": "乔治·索罗斯", "en": "George Soros"},
            "quotes": {"en": ["Markets are constantly in a state of uncertainty."]},
            "timeline": [{"year": 1992, "text": {"en": "Shorted the pound", "zh": "做空英镑"}}],
            "tags": ["macro"]
        }]);
        let resolved = normalize_value(&raw, "zh");
        assert_eq!(resolved.len(), 1);
        let soros = &resolved[0];
        assert_eq!(soros.name, "乔治·索罗斯");
        assert_eq!(soros.quotes.len(), 1);
        assert_eq!(soros.timeline[0].text, "做空英镑");
        assert_eq!(soros.region, "global");
        assert!(soros.works.is_empty());
    }

    #[test]
    fn never_drops_records() {
        let raw = json!([{"id": "empty"}, 5, {"name": {"en": "No id"}}]);
        let resolved = normalize_value(&raw, "en");
        let ids: Vec<_> = resolved.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["empty", "", ""]);
        assert_eq!(resolved[2].name, "No id");
        assert!(resolved.iter().all(|record| record.region == "global"));
    }

    #[test]
    fn explicit_region_is_kept() {
        let raw = json!([{"id": "buffett", "region": "na"}, {"id": "buffett"}]);
        let resolved = normalize_value(&raw, "en");
        assert_eq!(resolved[0].region, "na");
        assert_eq!(resolved[1].region, "us");
    }

    #[test]
    fn non_array_dataset_is_empty() {
        assert!(normalize_value(&json!({"investors": []}), "en").is_empty());
        assert!(normalize_value(&json!([]), "en").is_empty());
    }

    #[test]
    fn tags_and_year_bounds() {
        let raw = json!([
            {"id": "a", "tags": ["value", "growth"], "timeline": [{"year": 1977}, {"year": "x"}]},
            {"id": "b", "tags": ["macro", "value"], "timeline": [{"year": 2016}]},
            {"id": "c"}
        ]);
        let resolved = normalize_value(&raw, "en");
        assert_eq!(collect_tags(&resolved), vec!["growth", "macro", "value"]);
        assert_eq!(year_bounds(&resolved), Some((1977, 2016)));
        assert_eq!(year_bounds(&resolved[2..]), None);
    }
}
