//! Language resolution for localized fields.
//!
//! A field resolves by walking `[requested, "en", "zh", "es", "fr"]` with
//! duplicates removed and taking the first language that carries content.
//! When none does, the first entry with content in the field's stored order
//! wins. Plain values pass through; missing or malformed values become the
//! empty value of their type.

use timeline_model::{FieldValue, Localized};

/// Languages tried after the requested one, in order.
pub const FALLBACK_LANGS: [&str; 4] = ["en", "zh", "es", "fr"];

/// Languages the dataset is authored in.
pub const SUPPORTED_LANGS: [&str; 4] = ["zh", "en", "es", "fr"];

/// Language used when nothing else can be detected.
pub const DEFAULT_LANG: &str = "zh";

/// Locale prefixes recognised by [`detect_lang`], checked in this order.
const LANG_ALIASES: &[(&str, &str)] = &[
    ("zh", "zh"),
    ("zh-CN", "zh"),
    ("zh-TW", "zh"),
    ("en", "en"),
    ("en-US", "en"),
    ("es", "es"),
    ("es-ES", "es"),
    ("fr", "fr"),
    ("fr-FR", "fr"),
];

/// The ordered languages tried for `requested`, without duplicates.
pub fn fallback_chain(requested: &str) -> Vec<&str> {
    let mut chain = Vec::with_capacity(FALLBACK_LANGS.len() + 1);
    for lang in std::iter::once(requested).chain(FALLBACK_LANGS) {
        if !chain.contains(&lang) {
            chain.push(lang);
        }
    }
    chain
}

/// Resolve a localized field for `requested`.
pub fn resolve<T: FieldValue>(field: &Localized<T>, requested: &str) -> T {
    match field {
        Localized::ByLang(_) => fallback_chain(requested)
            .into_iter()
            .find_map(|lang| field.get(lang))
            .or_else(|| field.first_with_content())
            .cloned()
            .unwrap_or_default(),
        Localized::Plain(value) => value.clone(),
        Localized::Missing | Localized::Malformed(_) => T::default(),
    }
}

/// Pick a supported language from locale hints.
///
/// `candidates` are explicit preferences (for example cookie values) and are
/// matched case-insensitively by prefix; `navigator` is the client's locale
/// and is matched case-sensitively, as browsers report it. Falls back to
/// [`DEFAULT_LANG`].
pub fn detect_lang<S: AsRef<str>>(candidates: &[S], navigator: Option<&str>) -> &'static str {
    for candidate in candidates {
        let candidate = candidate.as_ref().to_lowercase();
        if candidate.is_empty() {
            continue;
        }
        if let Some((_, lang)) = LANG_ALIASES
            .iter()
            .find(|(prefix, _)| candidate.starts_with(&prefix.to_lowercase()))
        {
            return *lang;
        }
    }
    navigator
        .and_then(|nav| {
            LANG_ALIASES
                .iter()
                .find(|(prefix, _)| nav.starts_with(prefix))
                .map(|(_, lang)| *lang)
        })
        .unwrap_or(DEFAULT_LANG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(value: serde_json::Value) -> Localized<String> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn chain_removes_duplicates() {
        assert_eq!(fallback_chain("zh"), vec!["zh", "en", "es", "fr"]);
        assert_eq!(fallback_chain("de"), vec!["de", "en", "zh", "es", "fr"]);
    }

    #[test]
    fn requested_language_wins() {
        let name = field(json!({"en": "George Soros", "zh": "乔治·索罗斯"}));
        assert_eq!(resolve(&name, "zh"), "乔治·索罗斯");
    }

    #[test]
    fn english_precedes_chinese_in_fallback() {
        let name = field(json!({"zh": "乔治·索罗斯", "en": "George Soros"}));
        assert_eq!(resolve(&name, "es"), "George Soros");
    }

    #[test]
    fn unknown_languages_use_first_stored_key() {
        let name = field(json!({"de": "Hallo", "it": "Ciao"}));
        assert_eq!(resolve(&name, "fr"), "Hallo");
    }

    #[test]
    fn empty_values_are_skipped() {
        let name = field(json!({"en": "", "de": "", "it": "Ciao"}));
        assert_eq!(resolve(&name, "en"), "Ciao");
    }

    #[test]
    fn plain_and_missing_values() {
        assert_eq!(resolve(&field(json!("Peter Lynch")), "fr"), "Peter Lynch");
        assert_eq!(resolve(&field(json!(null)), "fr"), "");
        assert_eq!(resolve(&field(json!(12)), "fr"), "");
        let list: Localized<Vec<serde_json::Value>> = serde_json::from_value(json!("x")).unwrap();
        assert!(resolve(&list, "en").is_empty());
    }

    #[test]
    fn detects_language_from_hints() {
        assert_eq!(detect_lang(&["EN-gb"], None), "en");
        assert_eq!(detect_lang(&["", "fr-CA"], Some("es-ES")), "fr");
        assert_eq!(detect_lang::<&str>(&[], Some("es-ES")), "es");
        assert_eq!(detect_lang::<&str>(&[], Some("de-DE")), "zh");
        assert_eq!(detect_lang(&["pt-BR"], None), "zh");
    }
}
