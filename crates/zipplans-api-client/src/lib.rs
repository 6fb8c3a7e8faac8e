//! Single HTTP gateway for the zipplans API.
//!
//! Every request the client issues goes through [`Gateway::send`]: one base
//! URL, JSON bodies, credentials attached via the cookie store, and a
//! normalized [`ApiResponse`] back regardless of what went wrong. Transport
//! failures are folded into the response (`http_status == 0`) so callers only
//! ever branch on the status and message fields. No retries, no timeouts, no
//! cancellation.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:4000";
pub const ENV_API_BASE_URL: &str = "ZIPPLANS_API_BASE_URL";

/// HTTP methods the API surface uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayConfigError {
    #[error("base url must not be empty")]
    EmptyBaseUrl,
    #[error("base url must use http:// or https:// and include a host")]
    InvalidBaseUrl,
    #[error("failed to construct http client: {0}")]
    Client(String),
}

/// Normalized result of one API call.
///
/// The server wraps every response in a `{httpStatus, message, data?}`
/// envelope; a request that never produced a well-formed envelope (connect
/// error, non-JSON body) becomes a local result with `http_status == 0`,
/// which can never match a declared success status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub http_status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(http_status: u16, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            http_status,
            message: message.into(),
            data,
        }
    }

    /// Local failure: the request itself could not complete.
    #[must_use]
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self::new(0, message, None)
    }

    #[must_use]
    pub fn is(&self, status: u16) -> bool {
        self.http_status == status
    }
}

/// The one abstraction through which all HTTP calls are issued.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> ApiResponse;
}

/// Reqwest-backed gateway with a cookie store, so the session credential
/// rides along on every call.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    http: reqwest::Client,
}

impl HttpGateway {
    pub fn new(base_url: &str) -> Result<Self, GatewayConfigError> {
        let base_url = normalize_base_url(base_url)?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(|err| GatewayConfigError::Client(err.to_string()))?;
        Ok(Self { base_url, http })
    }

    pub fn from_env() -> Result<Self, GatewayConfigError> {
        let (base_url, _) = resolve_api_base_url()?;
        Self::new(&base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let trimmed = path.trim();
        if trimmed.starts_with('/') {
            format!("{}{}", self.base_url, trimmed)
        } else {
            format!("{}/{}", self.base_url, trimmed)
        }
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> ApiResponse {
        let url = self.endpoint(path);
        let mut request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(method = method.as_str(), %url, %err, "request failed");
                return ApiResponse::transport_failure(err.to_string());
            }
        };

        match response.json::<ApiResponse>().await {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(method = method.as_str(), %url, %err, "malformed response body");
                ApiResponse::transport_failure(err.to_string())
            }
        }
    }
}

/// Resolves the API base URL from the environment, falling back to the local
/// default. Returns the normalized URL and its source.
pub fn resolve_api_base_url() -> Result<(String, &'static str), GatewayConfigError> {
    if let Some(base_url) = env_non_empty(ENV_API_BASE_URL) {
        return normalize_base_url(&base_url).map(|normalized| (normalized, ENV_API_BASE_URL));
    }
    normalize_base_url(DEFAULT_API_BASE_URL).map(|normalized| (normalized, "default_local"))
}

pub fn normalize_base_url(raw: &str) -> Result<String, GatewayConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(GatewayConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(GatewayConfigError::InvalidBaseUrl);
    }
    let Some((_, remainder)) = trimmed.split_once("://") else {
        return Err(GatewayConfigError::InvalidBaseUrl);
    };
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(GatewayConfigError::InvalidBaseUrl);
    }
    Ok(trimmed.to_string())
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
