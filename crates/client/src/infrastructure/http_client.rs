//! HTTP adapter for the remote scenario and chat endpoints.
//!
//! Implements `RawApiPort` with reqwest on native and gloo-net in the
//! browser. Endpoint paths are joined onto the configured base URL.

use serde_json::Value;
use url::Url;

use crate::ports::outbound::{ApiError, RawApiPort};

/// HTTP adapter for the remote endpoints
#[derive(Clone)]
pub struct ApiAdapter {
    base_url: Url,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    /// Create an adapter for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        // Url::join treats a path without a trailing slash as a file;
        // normalize so joining "scenarios" keeps the full base path.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base_url: base,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        let response = gloo_net::http::Request::post(url.as_str())
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_onto_a_bare_host() {
        let adapter = ApiAdapter::new("http://localhost:8000").expect("valid base URL");
        let url = adapter.endpoint("scenarios").expect("joinable path");
        assert_eq!(url.as_str(), "http://localhost:8000/scenarios");
    }

    #[test]
    fn endpoint_keeps_a_base_path_prefix() {
        let adapter = ApiAdapter::new("http://example.com/api").expect("valid base URL");
        let url = adapter.endpoint("/chat").expect("joinable path");
        assert_eq!(url.as_str(), "http://example.com/api/chat");
    }

    #[test]
    fn an_unparsable_base_url_is_rejected() {
        assert!(matches!(
            ApiAdapter::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
