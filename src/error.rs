//! API Errors
//!
//! Failures of a backend call, and the text shown after `Failed to ...: `.

use serde_json::Value;

pub type ApiResult<T> = Result<T, ApiError>;

/// Shown when the server gives no usable `detail`
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response
    Status { status: u16, detail: Option<String> },
    /// Request never completed
    Transport(String),
    /// 2xx response whose body could not be decoded
    Decode(String),
    /// Request body could not be serialized
    Encode(String),
}

impl ApiError {
    /// Build from a failure response body
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: extract_detail(body),
        }
    }

    /// Message fragment for the user
    pub fn user_detail(&self) -> String {
        match self {
            ApiError::Status { detail: Some(detail), .. } => detail.clone(),
            ApiError::Status { detail: None, .. } => UNKNOWN_ERROR.to_string(),
            ApiError::Transport(msg) => format!("Network error ({})", msg),
            ApiError::Decode(msg) => format!("Unreadable response ({})", msg),
            ApiError::Encode(msg) => format!("Could not encode request ({})", msg),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status { status, detail } => {
                write!(f, "HTTP {}: {}", status, detail.as_deref().unwrap_or(UNKNOWN_ERROR))
            }
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ApiError::Encode(msg) => write!(f, "Encode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Pull `detail` out of an error body.
///
/// Falsy values (missing, null, `""`, `false`) count as absent. Structured
/// details such as validation error lists are passed through as compact JSON.
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    match parsed.as_object()?.get("detail")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let err = ApiError::from_status(400, r#"{"detail":"quantity must be positive"}"#);
        assert_eq!(err.user_detail(), "quantity must be positive");
    }

    #[test]
    fn test_missing_detail_is_unknown() {
        let err = ApiError::from_status(500, r#"{"error":"boom"}"#);
        assert_eq!(err, ApiError::Status { status: 500, detail: None });
        assert_eq!(err.user_detail(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_non_json_body_is_unknown() {
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_detail(""), None);
        assert_eq!(extract_detail(r#"[{"detail":"nested"}]"#), None);
    }

    #[test]
    fn test_falsy_detail_is_unknown() {
        assert_eq!(extract_detail(r#"{"detail":""}"#), None);
        assert_eq!(extract_detail(r#"{"detail":null}"#), None);
    }

    #[test]
    fn test_structured_detail_passes_through() {
        let body = r#"{"detail":[{"loc":["body","quantity"],"msg":"value is not a valid integer"}]}"#;
        let detail = extract_detail(body).unwrap();
        assert!(detail.starts_with("[{"));
        assert!(detail.contains("value is not a valid integer"));
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status { status: 404, detail: Some("Item not found".to_string()) };
        assert_eq!(err.to_string(), "HTTP 404: Item not found");
        assert_eq!(ApiError::Transport("offline".to_string()).to_string(), "Transport error: offline");
    }
}
