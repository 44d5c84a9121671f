//! Filter state in URL query strings.
//!
//! Parameters: `lang`, `min`, `max`, `tags` and `groups` (comma separated),
//! `q` (search text) and `sort` (omitted when `default`). Empty parameters
//! are ignored; the first occurrence of a repeated parameter wins. Encoding
//! is `application/x-www-form-urlencoded`, so `+` reads as a space.

use timeline_model::{FilterState, SortMode, YearRange};
use url::form_urlencoded;

/// Language and filter state restored from a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub lang: Option<String>,
    pub filter: FilterState,
}

/// Parse `query` (with or without a leading `?`) against the global year
/// window of `window`.
///
/// Bounds are clamped into the window; bounds that cross after clamping
/// reset to the full window. A missing or non-numeric bound takes the
/// matching global bound.
pub fn parse_query(query: &str, window: YearRange) -> QueryState {
    let params = parse_pairs(query);
    let get = |key: &str| {
        params
            .iter()
            .find(|(name, value)| name == key && !value.is_empty())
            .map(|(_, value)| value.as_str())
    };

    let year_range = YearRange::from_bounds(
        get("min").and_then(parse_int_prefix),
        get("max").and_then(parse_int_prefix),
        window.global_min,
        window.global_max,
    );
    let mut filter = FilterState::new(year_range);
    if let Some(tags) = get("tags") {
        filter.tags = split_list(tags).collect();
    }
    if let Some(groups) = get("groups") {
        filter.selected_groups = split_list(groups).collect();
    }
    if let Some(search) = get("q") {
        filter.search = search.to_string();
    }
    if let Some(sort) = get("sort") {
        filter.sort = SortMode::parse_lenient(sort);
    }

    QueryState {
        lang: get("lang").map(ToString::to_string),
        filter,
    }
}

/// Serialize `lang` and `state` into a query string (without `?`).
pub fn to_query(lang: &str, state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer
        .append_pair("lang", lang)
        .append_pair("min", &state.year_range.min.to_string())
        .append_pair("max", &state.year_range.max.to_string());
    if !state.tags.is_empty() {
        serializer.append_pair("tags", &join_list(&state.tags));
    }
    if !state.selected_groups.is_empty() {
        serializer.append_pair("groups", &join_list(&state.selected_groups));
    }
    if !state.search.is_empty() {
        serializer.append_pair("q", &state.search);
    }
    if state.sort != SortMode::Default {
        serializer.append_pair("sort", state.sort.as_str());
    }
    serializer.finish()
}

fn parse_pairs(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
}

fn join_list<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Leading integer of `value`, ignoring leading whitespace and any trailing
/// non-digits (`"1990s"` is 1990).
pub fn parse_int_prefix(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    i32::try_from(sign * magnitude).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> YearRange {
        YearRange::full(1907, 2024)
    }

    #[test]
    fn parses_every_parameter() {
        let parsed = parse_query(
            "?lang=en&min=1950&max=2000&tags=value,macro&groups=value&q=soros+fund&sort=year",
            window(),
        );
        assert_eq!(parsed.lang.as_deref(), Some("en"));
        let filter = parsed.filter;
        assert_eq!((filter.year_range.min, filter.year_range.max), (1950, 2000));
        assert!(filter.tags.contains("macro") && filter.tags.contains("value"));
        assert!(filter.selected_groups.contains("value"));
        assert_eq!(filter.search, "soros fund");
        assert_eq!(filter.sort, SortMode::Year);
    }

    #[test]
    fn crossing_bounds_reset_the_window() {
        let parsed = parse_query("min=2010&max=1950", window());
        assert!(parsed.filter.year_range.is_full());
    }

    #[test]
    fn out_of_window_bounds_are_clamped() {
        let parsed = parse_query("min=1800&max=3000", window());
        assert!(parsed.filter.year_range.is_full());
        let parsed = parse_query("min=1990s&max=abc", window());
        assert_eq!(
            (parsed.filter.year_range.min, parsed.filter.year_range.max),
            (1990, 2024)
        );
    }

    #[test]
    fn unknown_sort_and_empty_values() {
        let parsed = parse_query("sort=random&q=&tags=,,", window());
        assert_eq!(parsed.filter.sort, SortMode::Default);
        assert!(parsed.filter.search.is_empty());
        assert!(parsed.filter.tags.is_empty());
        assert_eq!(parsed.lang, None);
    }

    #[test]
    fn writes_query_and_reads_it_back() {
        let state = FilterState::new(YearRange::new(1960, 1990, 1907, 2024))
            .with_tags(["fixed-income", "bond"])
            .with_search("bill gross")
            .with_sort(SortMode::Name);
        let query = to_query("fr", &state);
        assert_eq!(
            query,
            "lang=fr&min=1960&max=1990&tags=bond%2Cfixed-income&q=bill+gross&sort=name"
        );
        let parsed = parse_query(&query, window());
        assert_eq!(parsed.lang.as_deref(), Some("fr"));
        assert_eq!(parsed.filter, state);
    }

    #[test]
    fn form_encoding_decodes_plus_and_percent_escapes() {
        let parsed = parse_query("q=caf%C3%A9+de+flore&tags=fixed%2Dincome&lang", window());
        assert_eq!(parsed.filter.search, "café de flore");
        assert!(parsed.filter.tags.contains("fixed-income"));
        assert_eq!(parsed.lang, None);

        let state = FilterState::new(window()).with_search("a&b=c+d");
        let query = to_query("en", &state);
        assert_eq!(query, "lang=en&min=1907&max=2024&q=a%26b%3Dc%2Bd");
        assert_eq!(parse_query(&query, window()).filter.search, "a&b=c+d");
    }

    #[test]
    fn default_sort_is_omitted() {
        let query = to_query("zh", &FilterState::new(window()));
        assert_eq!(query, "lang=zh&min=1907&max=2024");
    }

    #[test]
    fn integer_prefixes() {
        assert_eq!(parse_int_prefix(" 1990"), Some(1990));
        assert_eq!(parse_int_prefix("-5x"), Some(-5));
        assert_eq!(parse_int_prefix("x5"), None);
        assert_eq!(parse_int_prefix("99999999999"), None);
    }
}
