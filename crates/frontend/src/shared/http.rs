//! Browser HTTP transport for the list-view data sources.

use crate::shared::api_utils::{api_url, query_string};
use async_trait::async_trait;
use contracts::shared::list_view::{ApiError, ApiRequest, HttpTransport, Method};
use gloo_net::http::Request;
use serde_json::Value;

/// Sends [`ApiRequest`]s with `gloo-net` and decodes JSON bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = format!("{}{}", api_url(&request.path), query_string(&request.params));
        log::debug!("{} {}", request.method.as_str(), url);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");

        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::network(format!("Failed to build request: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let ok = response.ok();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::new(Some(status), Some(format!("Failed to read response: {}", e))))?;

        let body = decode_body(&text);
        if !ok {
            log::warn!("{} {} -> HTTP {}", request.method.as_str(), url, status);
            return Err(ApiError::from_body(status, &body.unwrap_or(Value::Null)));
        }
        body.map_err(|e| ApiError::new(Some(status), Some(format!("Failed to parse response: {}", e))))
    }
}

/// Empty bodies (204, bare DELETE) decode to `Null`.
fn decode_body(text: &str) -> Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
        assert_eq!(decode_body("  \n").unwrap(), Value::Null);
        assert_eq!(decode_body(r#"{"ok":true}"#).unwrap()["ok"], true);
        assert!(decode_body("<html>").is_err());
    }
}
