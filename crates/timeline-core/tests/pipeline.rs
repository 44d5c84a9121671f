//! Integration tests for the normalize, filter, sort and geometry stages.

use serde_json::json;
use timeline_core::geometry::{major_interval, minor_interval};
use timeline_core::{
    DisplayRange, compute_geometry, expand_groups, filter, filter_with_report, normalize,
    normalize_value, sort,
};
use timeline_model::{
    FilterState, GroupTable, InvestorRecord, ResolvedInvestor, SortMode, YearRange,
};

fn records() -> Vec<ResolvedInvestor> {
    let raw = json!([
        {"id": "a", "name": {"en": "Alpha"}, "tags": ["macro"],
         "timeline": [{"year": 1965, "text": {"en": "a"}}]},
        {"id": "b", "name": {"en": "Beta"}, "tags": [],
         "timeline": [{"year": 1990, "text": {"en": "b"}}]}
    ]);
    normalize_value(&raw, "en")
}

fn ids(records: &[&ResolvedInvestor]) -> Vec<String> {
    records.iter().map(|record| record.id.clone()).collect()
}

fn state(min: i32, max: i32) -> FilterState {
    FilterState::new(YearRange::new(min, max, 1907, 2024))
}

#[test]
fn year_filter_keeps_overlapping_records() {
    let records = records();
    let result = filter(&records, &state(1980, 2000));
    assert_eq!(ids(&result), vec!["b"]);
}

#[test]
fn empty_year_result_reverts_to_everything() {
    let records = records();
    let (result, report) = filter_with_report(&records, &state(2001, 2005));
    assert!(report.year_reverted);
    assert_eq!(ids(&result), vec!["a", "b"]);
}

#[test]
fn unmatched_text_reverts_before_the_year_filter() {
    let records = records();
    let state = state(1980, 2000).with_tags(["macro"]).with_search("zzz");
    let (result, report) = filter_with_report(&records, &state);
    assert!(report.tag_text_reverted);
    assert_eq!(ids(&result), vec!["b"]);
}

#[test]
fn ninety_three_year_window() {
    assert_eq!(major_interval(93), 20);
    assert_eq!(minor_interval(20), 2);
    let geometry = compute_geometry(&[], DisplayRange::new(1907, 2000));
    assert_eq!(geometry.major_interval, 20);
    assert_eq!(geometry.minor_interval, 2);
}

#[test]
fn missing_language_falls_back_to_english() {
    let raw: Vec<InvestorRecord> = serde_json::from_value(json!([
        {"id": "lynch", "name": {"en": "Peter Lynch", "zh": "彼得·林奇"}}
    ]))
    .unwrap();
    let resolved = normalize(&raw, "de");
    assert_eq!(resolved[0].name, "Peter Lynch");
    assert_eq!(resolved[0].region, "us");
}

#[test]
fn groups_feed_the_tag_filter() {
    let raw = json!([
        {"id": "bogle", "tags": ["index"]},
        {"id": "gross", "tags": ["bond"]},
        {"id": "simons", "tags": ["quant"]}
    ]);
    let records = normalize_value(&raw, "en");
    let tags = expand_groups(["index"], &GroupTable::default());
    let state = FilterState::new(YearRange::full(1907, 2024)).with_tags(tags);
    let result = sort(filter(&records, &state), SortMode::Name);
    assert_eq!(ids(&result), vec!["bogle"]);
}

#[test]
fn non_array_dataset_yields_nothing() {
    assert!(normalize_value(&json!({"id": "x"}), "en").is_empty());
    assert!(normalize_value(&json!([]), "en").is_empty());
}
