//! Timeline axis geometry.
//!
//! Positions are percentages along the axis: `(year - min) / total * 100`
//! with `total = max(1, max - min)`. Major ticks use the smallest interval
//! from [`MAJOR_CANDIDATES`] that yields at most [`MAX_MAJOR_LABELS`] labels;
//! minor ticks are derived from the major interval and skip positions a
//! major tick already occupies.

use serde::Serialize;
use timeline_model::{ResolvedEvent, YearRange};

/// Major tick intervals, tried smallest first.
pub const MAJOR_CANDIDATES: [i32; 8] = [1, 2, 5, 10, 20, 25, 50, 100];

/// Upper bound on `floor(total / interval) + 1` for a candidate to qualify.
pub const MAX_MAJOR_LABELS: i32 = 8;

/// Hard cap on emitted major ticks (eight intervals plus the boundary).
pub const MAX_MAJOR_TICKS: i32 = MAX_MAJOR_LABELS + 1;

/// Axis window in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayRange {
    pub min: i32,
    pub max: i32,
}

impl DisplayRange {
    /// Reversed bounds are swapped.
    pub fn new(min: i32, max: i32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Window covering every numeric year in `events`.
    pub fn spanning(events: &[ResolvedEvent]) -> Option<Self> {
        let mut years = events.iter().filter_map(|event| event.year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), year| (lo.min(year), hi.max(year)));
        Some(Self { min, max })
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// `max - min`, floored at 1.
    pub fn total(&self) -> i32 {
        self.max.saturating_sub(self.min).max(1)
    }
}

impl From<&YearRange> for DisplayRange {
    fn from(range: &YearRange) -> Self {
        Self::new(range.min, range.max)
    }
}

/// A labelled or unlabelled axis mark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub year: i32,
    pub offset: f64,
}

/// An event placed on the axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub year: i32,
    pub offset: f64,
    pub text: String,
}

/// Everything needed to draw one record's axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGeometry {
    pub range: DisplayRange,
    pub total: i32,
    /// Stride between major ticks as emitted. Spans of 900 years or more
    /// widen it past the largest candidate interval (200, 300, ...).
    pub major_interval: i32,
    /// Derived from the emitted stride, so widened spans get `major / 10`.
    pub minor_interval: i32,
    pub major_ticks: Vec<Tick>,
    pub minor_ticks: Vec<Tick>,
    pub markers: Vec<Marker>,
    /// No event fell inside the window, so every dated event is shown.
    pub showing_all_events: bool,
}

/// Smallest candidate whose label count fits, else the largest candidate.
pub fn major_interval(total: i32) -> i32 {
    let total = total.max(1);
    MAJOR_CANDIDATES
        .iter()
        .copied()
        .find(|candidate| total / candidate + 1 <= MAX_MAJOR_LABELS)
        .unwrap_or(MAJOR_CANDIDATES[MAJOR_CANDIDATES.len() - 1])
}

/// Minor interval for a major interval; 0 means no minor ticks.
pub fn minor_interval(major: i32) -> i32 {
    match major {
        50.. => 10,
        25..=49 => 5,
        10..=24 => 2,
        5..=9 => 1,
        _ => 0,
    }
}

/// Interval actually used for major ticks.
///
/// Spans longer than the largest candidate can label within
/// [`MAX_MAJOR_TICKS`] widen to the smallest multiple of that candidate
/// that fits.
pub fn major_stride(total: i32) -> i32 {
    let total = total.max(1);
    let interval = major_interval(total);
    if total / interval + 1 <= MAX_MAJOR_TICKS {
        return interval;
    }
    let step = MAJOR_CANDIDATES[MAJOR_CANDIDATES.len() - 1];
    step * (total / (step * MAX_MAJOR_TICKS) + 1)
}

/// Percentage offset of `year` along a window starting at `min`.
pub fn offset_percent(year: i32, min: i32, total: i32) -> f64 {
    if total == 0 {
        return 50.0;
    }
    (f64::from(year) - f64::from(min)) / f64::from(total) * 100.0
}

/// Compute ticks and markers for `events` drawn over `range`.
///
/// Markers come from the events inside the window; when there are none, all
/// dated events are used instead. Undated events never produce markers.
pub fn compute_geometry(events: &[ResolvedEvent], range: DisplayRange) -> TimelineGeometry {
    let total = range.total();
    let major = major_stride(total);
    let minor = if major > MAJOR_CANDIDATES[MAJOR_CANDIDATES.len() - 1] {
        major / 10
    } else {
        minor_interval(major)
    };

    let major_ticks = years_from(range, major)
        .map(|year| Tick {
            year,
            offset: offset_percent(year, range.min, total),
        })
        .collect();
    let minor_ticks = if minor > 0 {
        years_from(range, minor)
            .filter(|year| (i64::from(*year) - i64::from(range.min)) % i64::from(major) != 0)
            .map(|year| Tick {
                year,
                offset: offset_percent(year, range.min, total),
            })
            .collect()
    } else {
        Vec::new()
    };

    let dated: Vec<&ResolvedEvent> = events.iter().filter(|event| event.year.is_some()).collect();
    let mut shown: Vec<&ResolvedEvent> = dated
        .iter()
        .copied()
        .filter(|event| event.year.is_some_and(|year| range.contains(year)))
        .collect();
    let showing_all_events = shown.is_empty() && !dated.is_empty();
    if showing_all_events {
        shown = dated;
    }
    shown.sort_by_key(|event| event.year);
    let markers = shown
        .into_iter()
        .filter_map(|event| {
            let year = event.year?;
            Some(Marker {
                year,
                offset: offset_percent(year, range.min, total),
                text: event.text.clone(),
            })
        })
        .collect();

    TimelineGeometry {
        range,
        total,
        major_interval: major,
        minor_interval: minor,
        major_ticks,
        minor_ticks,
        markers,
        showing_all_events,
    }
}

/// Up to `limit` events for a card's event list, ordered by year: the events
/// inside the window, or every event when none falls inside.
pub fn highlights(
    events: &[ResolvedEvent],
    range: DisplayRange,
    limit: usize,
) -> Vec<ResolvedEvent> {
    let mut chosen: Vec<&ResolvedEvent> = events
        .iter()
        .filter(|event| event.year.is_some_and(|year| range.contains(year)))
        .collect();
    if chosen.is_empty() {
        chosen = events.iter().collect();
    }
    chosen.sort_by_key(|event| (event.year.is_none(), event.year));
    chosen.into_iter().take(limit).cloned().collect()
}

fn years_from(range: DisplayRange, step: i32) -> impl Iterator<Item = i32> {
    let step = usize::try_from(step.max(1)).unwrap_or(1);
    (range.min..=range.max).step_by(step)
}
