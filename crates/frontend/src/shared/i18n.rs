use contracts::shared::config::app_config;
use contracts::shared::i18n::Translator;
use leptos::prelude::*;

/// Reactive handle to the active translator.
#[derive(Clone, Copy)]
pub struct I18n {
    translator: RwSignal<Translator>,
}

impl I18n {
    pub fn new() -> Self {
        let mut translator = Translator::builtin();
        translator.set_locale(&app_config().i18n.default_locale);
        Self {
            translator: RwSignal::new(translator),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.with(|t| t.t(key))
    }

    pub fn t_args(&self, key: &str, args: &[(&str, String)]) -> String {
        self.translator.with(|t| t.t_args(key, args))
    }

    pub fn locale(&self) -> String {
        self.translator.with(|t| t.locale().to_string())
    }

    pub fn is_rtl(&self) -> bool {
        self.translator.with(|t| t.is_rtl())
    }

    /// Switches the locale and mirrors it onto `<html lang dir>`.
    pub fn set_locale(&self, locale: &str) {
        if self.translator.with_untracked(|t| t.locale() == locale) {
            return;
        }
        self.translator.update(|t| {
            t.set_locale(locale);
        });
        let (lang, rtl) = self
            .translator
            .with_untracked(|t| (t.locale().to_string(), t.is_rtl()));
        apply_document_direction(&lang, rtl);
    }

    /// Prefixes an app path with the active locale: `/about` -> `/ar/about`.
    pub fn href(&self, path: &str) -> String {
        localized_path(&self.locale(), path)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

pub fn localized_path(locale: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("/{}", locale)
    } else {
        format!("/{}/{}", locale, path)
    }
}

fn apply_document_direction(lang: &str, rtl: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let dir = if rtl { "rtl" } else { "ltr" };
    if root.set_attribute("lang", lang).is_err() || root.set_attribute("dir", dir).is_err() {
        log::warn!("failed to set document direction to {}", dir);
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_path() {
        assert_eq!(localized_path("ar", "/about"), "/ar/about");
        assert_eq!(localized_path("en", "/"), "/en");
        assert_eq!(localized_path("en", "dashboard/admin"), "/en/dashboard/admin");
    }
}
