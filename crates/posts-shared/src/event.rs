//! Inbound request event (API Gateway proxy integration shape).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single request to the posts handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsEvent {
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl PostsEvent {
    pub fn new(http_method: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Look up a query string parameter.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get(name)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_gateway_event() {
        let raw = r#"{
            "httpMethod": "DELETE",
            "body": null,
            "queryStringParameters": {"id": "abc"},
            "headers": {"Host": "example.com"}
        }"#;
        let event: PostsEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.http_method, "DELETE");
        assert_eq!(event.body, None);
        assert_eq!(event.query("id"), Some("abc"));
        assert_eq!(event.query("limit"), None);
    }

    #[test]
    fn test_missing_optional_fields() {
        let event: PostsEvent = serde_json::from_str(r#"{"httpMethod": "GET"}"#).unwrap();
        assert!(event.query_string_parameters.is_none());
        assert_eq!(event.query("limit"), None);
    }
}
