//! Caller-owned filter state.
//!
//! The pipeline never stores a [`FilterState`]; UI actions take the current
//! value and return a new one.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Earliest year offered by the year-range selector.
pub const BASE_MIN_YEAR: i32 = 1907;

/// Current calendar year, never earlier than [`BASE_MIN_YEAR`].
pub fn current_year() -> i32 {
    chrono::Local::now().year().max(BASE_MIN_YEAR)
}

/// Selected year window inside a global window.
///
/// Every constructor returns a value satisfying
/// `global_min <= min <= max <= global_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
    pub global_min: i32,
    pub global_max: i32,
}

impl YearRange {
    /// The whole global window selected. Reversed bounds are swapped.
    pub fn full(global_min: i32, global_max: i32) -> Self {
        let (lo, hi) = if global_min <= global_max {
            (global_min, global_max)
        } else {
            (global_max, global_min)
        };
        Self {
            min: lo,
            max: hi,
            global_min: lo,
            global_max: hi,
        }
    }

    /// `BASE_MIN_YEAR` through the current year.
    pub fn default_global() -> Self {
        Self::full(BASE_MIN_YEAR, current_year())
    }

    pub fn new(min: i32, max: i32, global_min: i32, global_max: i32) -> Self {
        Self {
            min,
            max,
            global_min,
            global_max,
        }
        .repaired()
    }

    /// Build from optional bounds; a missing (non-numeric) bound takes the
    /// matching global bound.
    pub fn from_bounds(
        min: Option<i32>,
        max: Option<i32>,
        global_min: i32,
        global_max: i32,
    ) -> Self {
        let full = Self::full(global_min, global_max);
        Self::new(
            min.unwrap_or(full.global_min),
            max.unwrap_or(full.global_max),
            full.global_min,
            full.global_max,
        )
    }

    /// Clamp both bounds into the global window; if they still cross, reset
    /// to the full window. Idempotent on valid ranges.
    #[must_use]
    pub fn repaired(self) -> Self {
        let full = Self::full(self.global_min, self.global_max);
        let min = self.min.clamp(full.global_min, full.global_max);
        let max = self.max.clamp(full.global_min, full.global_max);
        if min > max {
            return full;
        }
        Self { min, max, ..full }
    }

    pub fn is_valid(&self) -> bool {
        self.global_min <= self.min && self.min <= self.max && self.max <= self.global_max
    }

    /// Edit the lower bound. Crossing the upper bound drags it along.
    #[must_use]
    pub fn with_min(self, value: Option<i32>) -> Self {
        let full = Self::full(self.global_min, self.global_max);
        let min = value
            .unwrap_or(full.global_min)
            .clamp(full.global_min, full.global_max);
        let max = self.max.clamp(full.global_min, full.global_max).max(min);
        Self { min, max, ..full }
    }

    /// Edit the upper bound. Crossing the lower bound drags it along.
    #[must_use]
    pub fn with_max(self, value: Option<i32>) -> Self {
        let full = Self::full(self.global_min, self.global_max);
        let max = value
            .unwrap_or(full.global_max)
            .clamp(full.global_min, full.global_max);
        let min = self.min.clamp(full.global_min, full.global_max).min(max);
        Self { min, max, ..full }
    }

    /// Select the whole global window again.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::full(self.global_min, self.global_max)
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    pub fn is_full(&self) -> bool {
        self.min == self.global_min && self.max == self.global_max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::default_global()
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep dataset order.
    #[default]
    Default,
    /// Display name, ascending.
    Name,
    /// Earliest timeline year, ascending; undated records last.
    Year,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Default, SortMode::Name, SortMode::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Name => "name",
            SortMode::Year => "year",
        }
    }

    /// Unknown values select [`SortMode::Default`].
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "default" => Ok(SortMode::Default),
            "name" => Ok(SortMode::Name),
            "year" => Ok(SortMode::Year),
            other => Err(ModelError::UnknownSortMode(other.to_string())),
        }
    }
}

/// Everything the filter, sort and geometry stages read from the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Active tags. Matched exactly, never case-folded.
    pub tags: BTreeSet<String>,
    /// Active style groups; `tags` is derived from these when groups are used.
    pub selected_groups: BTreeSet<String>,
    pub search: String,
    pub year_range: YearRange,
    pub sort: SortMode,
}

impl FilterState {
    pub fn new(year_range: YearRange) -> Self {
        Self {
            tags: BTreeSet::new(),
            selected_groups: BTreeSet::new(),
            search: String::new(),
            year_range: year_range.repaired(),
            sort: SortMode::Default,
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn with_year_range(mut self, year_range: YearRange) -> Self {
        self.year_range = year_range.repaired();
        self
    }

    /// Clear tags, groups, search and sort, and select the full year window.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.year_range.reset())
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(YearRange::default_global())
    }
}
