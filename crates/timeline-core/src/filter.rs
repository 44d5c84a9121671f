//! Tag, text and year filtering with "never empty" degradation.
//!
//! Stages run in a fixed order:
//!
//! 1. tag membership AND case-insensitive text search;
//! 2. if that leaves nothing, revert to the full dataset (rule A);
//! 3. year overlap, always keeping records without timeline events;
//! 4. if that leaves nothing, revert to the full dataset again (rule B).
//!
//! Reverting always goes back to the full input, never to the previous
//! stage's output.

use serde::Serialize;
use timeline_model::{FilterState, ResolvedInvestor, YearRange};
use tracing::debug;

/// Which degradation rules fired during a filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    /// Tag and text filters matched nothing; the full dataset was used.
    pub tag_text_reverted: bool,
    /// The year filter matched nothing; the full dataset was used.
    pub year_reverted: bool,
}

impl FilterReport {
    pub fn degraded(&self) -> bool {
        self.tag_text_reverted || self.year_reverted
    }
}

/// Apply every filter in `state` to `records`.
pub fn filter<'a>(
    records: &'a [ResolvedInvestor],
    state: &FilterState,
) -> Vec<&'a ResolvedInvestor> {
    filter_with_report(records, state).0
}

/// Like [`filter`], also reporting which degradation rules fired.
///
/// The year range is repaired before use, so a hand-built or deserialized
/// state with crossed or out-of-window bounds still filters sensibly.
pub fn filter_with_report<'a>(
    records: &'a [ResolvedInvestor],
    state: &FilterState,
) -> (Vec<&'a ResolvedInvestor>, FilterReport) {
    let mut report = FilterReport::default();
    let query = state.search.to_lowercase();
    let range = state.year_range.repaired();

    let mut selected: Vec<&ResolvedInvestor> = records
        .iter()
        .filter(|record| matches_tags(record, state) && matches_text(record, &query))
        .collect();
    if selected.is_empty() {
        report.tag_text_reverted = true;
        selected = records.iter().collect();
    }

    let in_range: Vec<&ResolvedInvestor> = selected
        .into_iter()
        .filter(|record| matches_years(record, &range))
        .collect();
    let result = if in_range.is_empty() {
        report.year_reverted = true;
        records.iter().collect()
    } else {
        in_range
    };

    debug!(
        input = records.len(),
        output = result.len(),
        tag_text_reverted = report.tag_text_reverted,
        year_reverted = report.year_reverted,
        "filtered records"
    );
    (result, report)
}

/// True when no tags are active or the record carries one of them.
pub fn matches_tags(record: &ResolvedInvestor, state: &FilterState) -> bool {
    state.tags.is_empty() || record.tags.iter().any(|tag| state.tags.contains(tag))
}

/// True when `query` (already lower-cased) is empty or found in any
/// searchable field.
pub fn matches_text(record: &ResolvedInvestor, query: &str) -> bool {
    query.is_empty()
        || record
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(query))
}

/// True when the record has no timeline events or one of its numeric years
/// falls inside the range.
pub fn matches_years(record: &ResolvedInvestor, range: &YearRange) -> bool {
    record.timeline.is_empty() || record.years().any(|year| range.contains(year))
}
