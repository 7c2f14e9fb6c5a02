//! Backend API Client
//!
//! Endpoint wrappers over a [`Transport`], organized by resource.

mod clock_in;
mod items;
mod transport;

#[cfg(test)]
pub(crate) mod fake;

use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::ServerMessage;

pub use transport::{ApiRequest, HttpTransport, Method, Transport};

/// Characters escaped in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped in a query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub struct ApiClient<T = HttpTransport> {
    transport: T,
}

/// Client for the configured backend
pub fn http_client() -> ApiClient {
    ApiClient::new(HttpTransport::new(ApiConfig::resolve()))
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Send and split on status: body text on 2xx, `ApiError::Status` otherwise
    async fn execute(&self, request: ApiRequest) -> ApiResult<String> {
        let method = request.method.as_str();
        let path = request.path.clone();
        debug!("{} {}", method, path);

        let response = self.transport.send(request).await.map_err(|e| {
            warn!("{} {} did not complete: {}", method, path, e);
            e
        })?;

        if response.is_success() {
            Ok(response.body)
        } else {
            let err = ApiError::from_status(response.status, &response.body);
            warn!("{} {} failed: {}", method, path, err);
            Err(err)
        }
    }

    async fn fetch_as<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let body = self.execute(ApiRequest::get(path)).await?;
        decode(&body)
    }

    async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> ApiResult<String> {
        let request = ApiRequest::with_json(method, path, body)?;
        self.execute(request).await
    }

    async fn delete(&self, path: &str) -> ApiResult<Option<String>> {
        let body = self.execute(ApiRequest::delete(path)).await?;
        Ok(acknowledgement(&body))
    }
}

/// Render a response body the way the result panels show it (2-space indent)
///
/// Whole-valued floats print without a fraction (`3.0` as `3`), matching
/// how a browser serializes numbers.
pub fn pretty_json<V: Serialize>(value: &V) -> String {
    serde_json::to_value(value)
        .map(integral_floats)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|e| format!("<unprintable: {}>", e))
}

/// Largest magnitude a double holds without losing integer precision
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn integral_floats(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => Value::from(f as i64),
            _ => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(integral_floats).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, integral_floats(value)))
                .collect(),
        ),
        other => other,
    }
}

fn decode<R: DeserializeOwned>(body: &str) -> ApiResult<R> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `message` from a create/update/delete body, if the server sent one
fn acknowledgement(body: &str) -> Option<String> {
    serde_json::from_str::<ServerMessage>(body)
        .ok()
        .and_then(|m| m.message)
}

fn record_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, utf8_percent_encode(id.trim(), PATH_SEGMENT))
}

fn query_path(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}
