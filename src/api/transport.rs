//! HTTP Transport
//!
//! The seam between endpoint wrappers and the network. The browser build
//! uses reqwest (fetch underneath); tests swap in a recording fake.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One outgoing request. `path` is absolute and may carry a query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// JSON text; sent with `Content-Type: application/json`
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }

    pub fn with_json<B: serde::Serialize>(method: Method, path: impl Into<String>, body: &B) -> ApiResult<Self> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { method, path: path.into(), body: Some(body) })
    }

    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| JSON_CONTENT_TYPE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and hands back status and body text.
///
/// Only a request that never completes is an error here; HTTP failure
/// statuses come back as ordinary responses.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.config.url(&request.path);
        let content_type = request.content_type();
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let (Some(body), Some(content_type)) = (request.body, content_type) {
            builder = builder.header(CONTENT_TYPE, content_type).body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_request_has_content_type() {
        let request = ApiRequest::with_json(Method::Post, "/clock-in", &serde_json::json!({"email": "a@b.com"})).unwrap();
        assert_eq!(request.content_type(), Some(JSON_CONTENT_TYPE));
        assert_eq!(request.body.as_deref(), Some(r#"{"email":"a@b.com"}"#));
    }

    #[test]
    fn test_get_has_no_body() {
        let request = ApiRequest::get("/items");
        assert_eq!(request.method.as_str(), "GET");
        assert_eq!(request.content_type(), None);
    }

    #[test]
    fn test_success_range() {
        assert!(ApiResponse { status: 201, body: String::new() }.is_success());
        assert!(!ApiResponse { status: 302, body: String::new() }.is_success());
        assert!(!ApiResponse { status: 422, body: String::new() }.is_success());
    }
}
