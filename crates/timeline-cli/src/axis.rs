//! Text rendering of a timeline axis.

use timeline_core::TimelineGeometry;

const MAJOR: char = '┼';
const MINOR: char = '┬';
const LINE: char = '─';
const MARKER: char = '●';

/// Draw `geometry` as a single line of `width` cells.
///
/// Markers overwrite ticks. Offsets outside the window (markers shown
/// because nothing fell inside it) are pinned to the nearest end.
pub fn render_axis(geometry: &TimelineGeometry, width: usize) -> String {
    let width = width.max(2);
    let mut cells = vec![LINE; width];
    for tick in &geometry.minor_ticks {
        cells[cell_for(tick.offset, width)] = MINOR;
    }
    for tick in &geometry.major_ticks {
        cells[cell_for(tick.offset, width)] = MAJOR;
    }
    for marker in &geometry.markers {
        cells[cell_for(marker.offset, width)] = MARKER;
    }
    cells.into_iter().collect()
}

/// Axis with the window bounds on either side, e.g. `1960 ┼──●──┼ 2000`.
pub fn render_labelled_axis(geometry: &TimelineGeometry, width: usize) -> String {
    format!(
        "{} {} {}",
        geometry.range.min,
        render_axis(geometry, width),
        geometry.range.max
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn cell_for(offset: f64, width: usize) -> usize {
    let last = width - 1;
    let position = (offset.clamp(0.0, 100.0) / 100.0 * last as f64).round();
    (position as usize).min(last)
}
