//! Style-group selection and expansion into tags.

use std::collections::BTreeSet;

use timeline_model::{ALL_GROUP, FilterState, GroupTable};

/// Union of the tags of every selected group. Unknown keys add nothing.
pub fn expand_groups<S: AsRef<str>>(
    selected: impl IntoIterator<Item = S>,
    table: &GroupTable,
) -> BTreeSet<String> {
    selected
        .into_iter()
        .flat_map(|key| table.tags_for(key.as_ref()).to_vec())
        .collect()
}

/// Toggle a group chip.
///
/// `"all"` clears every group and tag. Any other key is toggled and the tag
/// set is rebuilt from scratch over the resulting selection.
#[must_use]
pub fn toggle_group(state: &FilterState, key: &str, table: &GroupTable) -> FilterState {
    let mut next = state.clone();
    if key == ALL_GROUP {
        next.selected_groups.clear();
        next.tags.clear();
        return next;
    }
    if !next.selected_groups.remove(key) {
        next.selected_groups.insert(key.to_string());
    }
    next.tags = expand_groups(&next.selected_groups, table);
    next
}

/// Replace the group selection wholesale, e.g. when restoring from a URL.
#[must_use]
pub fn select_groups<I, S>(state: &FilterState, groups: I, table: &GroupTable) -> FilterState
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut next = state.clone();
    next.selected_groups = groups.into_iter().map(Into::into).collect();
    if next.selected_groups.contains(ALL_GROUP) {
        next.selected_groups.clear();
        next.tags.clear();
        return next;
    }
    next.tags = expand_groups(&next.selected_groups, table);
    next
}

/// Toggle a single tag chip, independent of groups.
#[must_use]
pub fn toggle_tag(state: &FilterState, tag: &str) -> FilterState {
    let mut next = state.clone();
    if !next.tags.remove(tag) {
        next.tags.insert(tag.to_string());
    }
    next
}

/// The "all" chip is active while nothing is selected.
pub fn is_all_active(state: &FilterState) -> bool {
    state.selected_groups.is_empty() && state.tags.is_empty()
}
