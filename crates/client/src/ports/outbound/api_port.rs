//! HTTP boundary for the remote scenario and chat endpoints.
//!
//! `RawApiPort` is the object-safe boundary implemented by adapters; the
//! composition root stores it behind `Arc<dyn RawApiPort>`. The application
//! layer provides a typed wrapper (`application::api::Api`) that implements
//! the generic `ApiPort` on top of it.
//!
//! Note: The async methods use `async_trait` instead of returning
//! `Pin<Box<dyn Future>>` for better mockall compatibility.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors crossing the HTTP boundary.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, DNS, ...)
    #[error("Request failed: {0}")]
    Network(String),

    /// The base URL or endpoint path could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status
    #[error("Server returned status {0}")]
    Status(u16),

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Object-safe HTTP port implemented by adapters.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// POST a JSON body and return the JSON response.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}

/// Typed HTTP port used by application services.
///
/// Not object-safe (generic methods); services are generic over it and the
/// composition root instantiates them with the `Api` wrapper.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync + 'static {
    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;
}
