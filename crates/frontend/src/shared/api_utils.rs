//! API utilities for frontend-backend communication

use contracts::shared::config::app_config;

/// Базовый URL backend: хост страницы и порт API из конфигурации.
///
/// Без window (тесты) возвращает пустую строку.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, app_config().api.port)
}

/// Full URL of an endpoint path such as `/users`, with the API prefix.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), app_config().api_path(path))
}

/// `?a=1&b=x%20y`, or an empty string when there are no params.
pub fn query_string(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", pairs.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_encodes_values() {
        let params = vec![
            ("search".to_string(), "sea view".to_string()),
            ("page".to_string(), "2".to_string()),
        ];
        assert_eq!(query_string(&params), "?search=sea%20view&page=2");
        assert_eq!(query_string(&[]), "");
    }
}
