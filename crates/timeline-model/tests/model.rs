//! Tests for timeline-model types.

use serde_json::json;
use timeline_model::{FilterState, InvestorRecord, Localized, SortMode, YearRange};

#[test]
fn parses_a_multilingual_record() {
    let raw = json!({
        "id": "buffett",
        "name": {"zh": "沃伦·巴菲特", "en": "Warren Buffett"},
        "summary": {"en": "Value investing icon."},
        "timeline": [
            {"year": 1965, "text": {"zh": "接手伯克希尔", "en": "Took control of Berkshire"}}
        ],
        "links": {"en": [{"label": "Letters", "url": "https://example.com", "type": "site"}]},
        "tags": ["value"]
    });
    let record: InvestorRecord = serde_json::from_value(raw).expect("parse record");

    assert_eq!(record.id, "buffett");
    assert_eq!(record.name.languages(), vec!["zh", "en"]);
    assert_eq!(record.timeline[0].year, Some(1965));
    assert!(record.links.get("en").is_some());
    assert_eq!(record.works, Localized::Missing);
    assert_eq!(record.region, None);
}

#[test]
fn filter_state_serializes_with_camel_case() {
    let state = FilterState::new(YearRange::new(1950, 2000, 1907, 2024)).with_sort(SortMode::Year);
    let value = serde_json::to_value(&state).expect("serialize state");
    assert_eq!(value["yearRange"]["globalMin"], json!(1907));
    assert_eq!(value["sort"], json!("year"));
    assert_eq!(value["selectedGroups"], json!([]));

    let round: FilterState = serde_json::from_value(value).expect("deserialize state");
    assert_eq!(round, state);
}

#[test]
fn default_range_ends_at_current_year() {
    let range = YearRange::default_global();
    assert_eq!(range.global_min, timeline_model::BASE_MIN_YEAR);
    assert_eq!(range.global_max, timeline_model::current_year());
    assert!(range.is_full());
}
