//! Turning command-line filters into a language and a `FilterState`.

use timeline_core::{detect_lang, parse_query, select_groups};
use timeline_model::{FilterState, GroupTable, SortMode, YearRange};

/// Filters as given on the command line, before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct FilterRequest {
    pub lang: Option<String>,
    pub tags: Vec<String>,
    pub groups: Vec<String>,
    pub search: Option<String>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub sort: Option<SortMode>,
    /// A URL query string (`lang=en&min=1960&tags=value`).
    pub query: Option<String>,
}

/// The resolved language and filter state for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// Requested language. Not necessarily one the dataset carries; field
    /// resolution falls back through the usual chain.
    pub lang: String,
    pub state: FilterState,
}

/// Merge `request` over its query string. Explicit flags win over query
/// parameters.
///
/// An explicit `--lang` or query `lang` is used as given. Only when neither
/// is present is the language detected from `locale` (e.g. `$LANG`), falling
/// back to the default language.
pub fn resolve_request(
    request: &FilterRequest,
    window: YearRange,
    table: &GroupTable,
    locale: Option<&str>,
) -> ResolvedRequest {
    let parsed = request
        .query
        .as_deref()
        .map(|query| parse_query(query, window));
    let query_lang = parsed.as_ref().and_then(|parsed| parsed.lang.clone());
    let mut state = parsed.map_or_else(|| FilterState::new(window), |parsed| parsed.filter);

    if !request.tags.is_empty() {
        state.tags = request.tags.iter().cloned().collect();
    }
    if let Some(search) = &request.search {
        state.search.clone_from(search);
    }
    if request.min.is_some() || request.max.is_some() {
        state.year_range = YearRange::new(
            request.min.unwrap_or(state.year_range.min),
            request.max.unwrap_or(state.year_range.max),
            window.global_min,
            window.global_max,
        );
    }
    if let Some(sort) = request.sort {
        state.sort = sort;
    }
    let groups: Vec<String> = if request.groups.is_empty() {
        state.selected_groups.iter().cloned().collect()
    } else {
        request.groups.clone()
    };
    if !groups.is_empty() {
        state = select_groups(&state, groups, table);
    }

    let lang = [request.lang.as_deref(), query_lang.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|lang| !lang.is_empty())
        .map_or_else(
            || detect_lang::<&str>(&[], locale).to_string(),
            ToString::to_string,
        );
    ResolvedRequest { lang, state }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> YearRange {
        YearRange::full(1907, 2024)
    }

    #[test]
    fn defaults_without_flags() {
        let resolved =
            resolve_request(&FilterRequest::default(), window(), &GroupTable::default(), None);
        assert_eq!(resolved.lang, "zh");
        assert_eq!(resolved.state, FilterState::new(window()));
    }

    #[test]
    fn flags_override_the_query() {
        let request = FilterRequest {
            lang: Some("fr".to_string()),
            min: Some(1950),
            search: Some("magellan".to_string()),
            query: Some("lang=en&min=1990&max=2000&q=berkshire&sort=name".to_string()),
            ..FilterRequest::default()
        };
        let resolved = resolve_request(&request, window(), &GroupTable::default(), None);
        assert_eq!(resolved.lang, "fr");
        assert_eq!(resolved.state.year_range.min, 1950);
        assert_eq!(resolved.state.year_range.max, 2000);
        assert_eq!(resolved.state.search, "magellan");
        assert_eq!(resolved.state.sort, SortMode::Name);
    }

    #[test]
    fn explicit_languages_are_kept_verbatim() {
        let request = FilterRequest {
            lang: Some("de".to_string()),
            ..FilterRequest::default()
        };
        let resolved = resolve_request(&request, window(), &GroupTable::default(), Some("fr_FR"));
        assert_eq!(resolved.lang, "de");

        let request = FilterRequest {
            query: Some("lang=it".to_string()),
            ..FilterRequest::default()
        };
        let resolved = resolve_request(&request, window(), &GroupTable::default(), None);
        assert_eq!(resolved.lang, "it");
    }

    #[test]
    fn groups_expand_into_tags() {
        let request = FilterRequest {
            tags: vec!["value".to_string()],
            groups: vec!["quant".to_string()],
            ..FilterRequest::default()
        };
        let resolved = resolve_request(&request, window(), &GroupTable::default(), None);
        assert!(resolved.state.selected_groups.contains("quant"));
        assert!(resolved.state.tags.contains("quant"));
        assert!(!resolved.state.tags.contains("value"));
    }

    #[test]
    fn locale_is_the_last_resort() {
        let resolved = resolve_request(
            &FilterRequest::default(),
            window(),
            &GroupTable::default(),
            Some("es_ES.UTF-8"),
        );
        assert_eq!(resolved.lang, "es");
    }
}
