//! Translation dictionaries and key lookup.
//!
//! Dictionaries are nested JSON documents flattened into dotted keys
//! (`{"nav": {"home": "Home"}}` -> `nav.home`). Lookup falls back to the
//! default locale, then to the key itself.

use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

pub const DEFAULT_LOCALE: &str = "en";

/// Locales written right-to-left.
const RTL_LOCALES: [&str; 4] = ["ar", "he", "fa", "ur"];

const EN_JSON: &str = include_str!("../../i18n/en.json");
const AR_JSON: &str = include_str!("../../i18n/ar.json");

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("dictionary is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dictionary root must be an object")]
    NotAnObject,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn from_json(json: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(I18nError::NotAnObject);
        }
        let mut entries = HashMap::new();
        flatten("", &value, &mut entries);
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, inner, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        _ => {}
    }
}

#[derive(Debug, Clone)]
pub struct Translator {
    dictionaries: HashMap<String, Dictionary>,
    default_locale: String,
    locale: String,
}

impl Translator {
    pub fn new(default_locale: impl Into<String>) -> Self {
        let default_locale = default_locale.into();
        Self {
            dictionaries: HashMap::new(),
            locale: default_locale.clone(),
            default_locale,
        }
    }

    /// English and Arabic dictionaries bundled with the app.
    pub fn builtin() -> Self {
        let mut translator = Self::new(DEFAULT_LOCALE);
        for (locale, json) in [("en", EN_JSON), ("ar", AR_JSON)] {
            match Dictionary::from_json(json) {
                Ok(dictionary) => translator.insert(locale, dictionary),
                Err(e) => log::error!("bundled '{}' dictionary failed to load: {}", locale, e),
            }
        }
        translator
    }

    pub fn insert(&mut self, locale: impl Into<String>, dictionary: Dictionary) {
        self.dictionaries.insert(locale.into(), dictionary);
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.dictionaries.contains_key(locale)
    }

    /// Switches locale; unknown locales fall back to the default.
    pub fn set_locale(&mut self, locale: &str) -> &str {
        self.locale = if self.has_locale(locale) {
            locale.to_string()
        } else {
            log::warn!("unknown locale '{}', using '{}'", locale, self.default_locale);
            self.default_locale.clone()
        };
        &self.locale
    }

    pub fn is_rtl(&self) -> bool {
        RTL_LOCALES.contains(&self.locale.as_str())
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.dictionaries
            .get(&self.locale)
            .and_then(|d| d.get(key))
            .or_else(|| {
                self.dictionaries
                    .get(&self.default_locale)
                    .and_then(|d| d.get(key))
            })
    }

    /// Translated text, or the key itself when missing everywhere.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    pub fn t_or(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or(default).to_string()
    }

    /// Translation with `{name}` placeholders substituted.
    pub fn t_args(&self, key: &str, args: &[(&str, String)]) -> String {
        args.iter().fold(self.t(key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}

/// Splits `/ar/dashboard/admin` into `("ar", "/dashboard/admin")`.
///
/// Paths without a supported locale segment get the default locale and are
/// returned unchanged.
pub fn locale_from_path<'a>(path: &'a str, supported: &[String], default: &'a str) -> (String, &'a str) {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.find('/') {
        Some(i) => (&trimmed[..i], &trimmed[i..]),
        None => (trimmed, ""),
    };
    if supported.iter().any(|l| l == first) {
        let rest = if rest.is_empty() { "/" } else { rest };
        (first.to_string(), rest)
    } else {
        (default.to_string(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> Translator {
        let mut t = Translator::new("en");
        t.insert(
            "en",
            Dictionary::from_json(r#"{"nav": {"home": "Home", "about": "About"}, "pager": {"range": "{start}-{end} of {total}"}}"#)
                .unwrap(),
        );
        t.insert("ar", Dictionary::from_json(r#"{"nav": {"home": "الرئيسية"}}"#).unwrap());
        t
    }

    #[test]
    fn test_lookup_falls_back_to_default_locale_then_key() {
        let mut t = translator();
        t.set_locale("ar");
        assert_eq!(t.t("nav.home"), "الرئيسية");
        assert_eq!(t.t("nav.about"), "About");
        assert_eq!(t.t("nav.missing"), "nav.missing");
        assert_eq!(t.t_or("nav.missing", "Missing"), "Missing");
        assert!(t.is_rtl());
    }

    #[test]
    fn test_unknown_locale_uses_default() {
        let mut t = translator();
        assert_eq!(t.set_locale("fr"), "en");
        assert!(!t.is_rtl());
    }

    #[test]
    fn test_placeholders() {
        let t = translator();
        let text = t.t_args(
            "pager.range",
            &[("start", "1".into()), ("end", "10".into()), ("total", "47".into())],
        );
        assert_eq!(text, "1-10 of 47");
    }

    #[test]
    fn test_dictionary_rejects_non_objects() {
        assert!(matches!(Dictionary::from_json("[1]"), Err(I18nError::NotAnObject)));
        assert!(Dictionary::from_json("{").is_err());
    }

    #[test]
    fn test_locale_from_path() {
        let supported = vec!["en".to_string(), "ar".to_string()];
        assert_eq!(locale_from_path("/ar/dashboard/admin", &supported, "en"), ("ar".to_string(), "/dashboard/admin"));
        assert_eq!(locale_from_path("/en", &supported, "en"), ("en".to_string(), "/"));
        assert_eq!(locale_from_path("/dashboard", &supported, "en"), ("en".to_string(), "/dashboard"));
    }

    #[test]
    fn test_builtin_dictionaries_cover_the_same_keys() {
        let t = Translator::builtin();
        assert!(t.has_locale("en"));
        assert!(t.has_locale("ar"));
        let en = Dictionary::from_json(EN_JSON).unwrap();
        let ar = Dictionary::from_json(AR_JSON).unwrap();
        for key in en.entries.keys() {
            assert!(ar.get(key).is_some(), "missing ar translation for {}", key);
        }
    }
}
