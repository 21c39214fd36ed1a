use crate::shared::list_view::debounce::DEFAULT_DEBOUNCE_MS;
use crate::shared::list_view::paginator::DEFAULT_PAGE_SIZE_OPTIONS;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend port on the page's host.
    pub port: u16,
    /// Path prefix prepended to every endpoint, e.g. `/api`.
    #[serde(default)]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub debounce_ms: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct I18nConfig {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales: vec!["en".to_string(), "ar".to_string()],
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 5000
prefix = "/api"

[list]
default_page_size = 10
page_size_options = [5, 10, 20, 50, 100]
debounce_ms = 300

[i18n]
default_locale = "en"
locales = ["en", "ar"]
"#;

static APP_CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::embedded);

/// Process-wide configuration, parsed once on first use.
pub fn app_config() -> &'static AppConfig {
    &APP_CONFIG
}

impl AppConfig {
    /// Parse and sanity-check a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(contents)?;

        config.list.page_size_options.retain(|size| *size > 0);
        if config.list.page_size_options.is_empty() {
            config.list.page_size_options = DEFAULT_PAGE_SIZE_OPTIONS.to_vec();
        }
        if config.list.default_page_size == 0 {
            return Err(ConfigError::Invalid("default_page_size must be positive".into()));
        }
        if !config.list.page_size_options.contains(&config.list.default_page_size) {
            config.list.page_size_options.push(config.list.default_page_size);
            config.list.page_size_options.sort_unstable();
        }
        if !config.i18n.locales.contains(&config.i18n.default_locale) {
            return Err(ConfigError::Invalid(format!(
                "default locale '{}' is not in the supported locales",
                config.i18n.default_locale
            )));
        }
        Ok(config)
    }

    /// Embedded defaults.
    pub fn embedded() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("embedded configuration is broken: {}", e);
                Self::default()
            }
        }
    }

    /// `prefix + path`, tolerating a missing or doubled slash.
    pub fn api_path(&self, path: &str) -> String {
        let prefix = self.api.prefix.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", prefix, path)
        } else {
            format!("{}/{}", prefix, path)
        }
    }

    pub fn is_supported_locale(&self, locale: &str) -> bool {
        self.i18n.locales.iter().any(|l| l == locale)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                port: 5000,
                prefix: "/api".to_string(),
            },
            list: ListConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_path("/users"), "/api/users");
        assert_eq!(config.api_path("users"), "/api/users");
    }

    #[test]
    fn test_partial_config_uses_section_defaults() {
        let config = AppConfig::from_toml("[api]\nport = 8080\n").unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.api.prefix, "");
        assert_eq!(config.list.debounce_ms, 300);
        assert_eq!(config.api_path("/events"), "/events");
    }

    #[test]
    fn test_page_size_options_are_normalized() {
        let config = AppConfig::from_toml(
            "[api]\nport = 1\n[list]\ndefault_page_size = 25\npage_size_options = [0, 10, 50]\ndebounce_ms = 150\n",
        )
        .unwrap();
        assert_eq!(config.list.page_size_options, vec![10, 25, 50]);
    }

    #[test]
    fn test_app_config_is_the_embedded_one() {
        assert_eq!(app_config(), &AppConfig::embedded());
        assert!(app_config().is_supported_locale("ar"));
        assert!(!app_config().is_supported_locale("fr"));
    }

    #[test]
    fn test_rejects_unknown_default_locale() {
        let doc = "[api]\nport = 1\n[i18n]\ndefault_locale = \"fr\"\nlocales = [\"en\"]\n";
        assert!(matches!(AppConfig::from_toml(doc), Err(ConfigError::Invalid(_))));
        assert!(AppConfig::from_toml("not toml").is_err());
    }
}
