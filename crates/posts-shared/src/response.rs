//! Response envelope and error documents (RFC 7807 for errors).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Content type of every response body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Outbound response envelope.
///
/// `body` is always a string holding a JSON document, as required by the
/// API Gateway proxy integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ProxyResponse {
    /// Serialize `payload` into a JSON envelope with the given status.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::raw(status_code, serde_json::to_string(payload)?))
    }

    /// Build an envelope around an already encoded JSON body.
    pub fn raw(status_code: u16, body: impl Into<String>) -> Self {
        let headers = HashMap::from([("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())]);
        Self {
            status_code,
            headers,
            body: body.into(),
        }
    }

    /// Decode the body back into JSON, mostly useful for clients and tests.
    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Plain `{"message": ...}` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Field-level messages, in validation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
            errors: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self::new(422, "Validation Failed")
            .with_detail(errors.join(" "))
            .with_errors(errors)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let response = ProxyResponse::json(200, &MessageResponse::new("Item Deleted")).unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert!(value["body"].is_string());
        assert_eq!(response.body_json().unwrap()["message"], "Item Deleted");
    }

    #[test]
    fn test_error_document_omits_empty_fields() {
        let value = serde_json::to_value(ErrorResponse::internal_error()).unwrap();
        assert_eq!(value["type"], "about:blank");
        assert!(value.get("detail").is_none());
        assert!(value.get("errors").is_none());
    }
}
