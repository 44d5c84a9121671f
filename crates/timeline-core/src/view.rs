//! End-to-end view model: normalize, expand groups, filter, sort and lay out.

use serde::Serialize;
use timeline_model::{FilterState, GroupTable, InvestorRecord, ResolvedEvent, ResolvedInvestor};
use tracing::{debug, info_span};

use crate::filter::{FilterReport, filter_with_report};
use crate::geometry::{DisplayRange, TimelineGeometry, compute_geometry, highlights};
use crate::groups::expand_groups;
use crate::normalize::{collect_tags, normalize};
use crate::sort::sort;

/// Events listed on each card.
pub const HIGHLIGHT_LIMIT: usize = 3;

/// One rendered record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestorCard {
    pub record: ResolvedInvestor,
    pub geometry: TimelineGeometry,
    pub highlights: Vec<ResolvedEvent>,
}

/// Everything a renderer needs for one language and filter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView {
    pub lang: String,
    /// The state actually applied, with group selections expanded into tags.
    pub state: FilterState,
    /// Tag vocabulary of the whole dataset.
    pub tags: Vec<String>,
    pub total_records: usize,
    pub report: FilterReport,
    pub cards: Vec<InvestorCard>,
}

impl TimelineView {
    pub fn ids(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.record.id.as_str()).collect()
    }
}

/// Run the full pipeline over `raw`.
///
/// When groups are selected, their expansion replaces the tag set before
/// filtering; an empty group selection leaves the tags untouched. The year
/// range is repaired first and the repaired range drives both filtering and
/// card geometry.
pub fn build_view(
    raw: &[InvestorRecord],
    lang: &str,
    state: &FilterState,
    table: &GroupTable,
) -> TimelineView {
    let _span = info_span!("build_view", lang, records = raw.len()).entered();

    let resolved = normalize(raw, lang);
    let mut applied = state.clone();
    applied.year_range = applied.year_range.repaired();
    if !applied.selected_groups.is_empty() {
        applied.tags = expand_groups(&applied.selected_groups, table);
    }

    let (selected, report) = filter_with_report(&resolved, &applied);
    let ordered = sort(selected, applied.sort);
    let range = DisplayRange::from(&applied.year_range);
    let cards: Vec<InvestorCard> = ordered
        .into_iter()
        .map(|record| InvestorCard {
            geometry: compute_geometry(&record.timeline, range),
            highlights: highlights(&record.timeline, range, HIGHLIGHT_LIMIT),
            record: record.clone(),
        })
        .collect();
    debug!(cards = cards.len(), degraded = report.degraded(), "built view");

    TimelineView {
        lang: lang.to_string(),
        tags: collect_tags(&resolved),
        total_records: resolved.len(),
        state: applied,
        report,
        cards,
    }
}
