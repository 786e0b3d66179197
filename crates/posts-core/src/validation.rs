//! Request body validation.
//!
//! Turns a raw JSON request body into [`PostFields`], collecting one message
//! per offending field. Fields are always checked in the same order so that
//! clients get a stable error list.
//!
//! A field is "not provided" when it is missing, `null`, or empty for its
//! type: an empty string for every field, and additionally an empty list for
//! `tags`. A numeric zero is a valid `likes` count.

use serde_json::{Map, Value};

use crate::domain::PostFields;
use crate::error::DomainError;

/// Content fields, in the order they are validated and reported.
pub const CONTENT_FIELDS: [&str; 5] = ["title", "body", "category", "likes", "tags"];

/// Validate a create request body.
pub fn validate_create(body: Option<&str>) -> Result<PostFields, DomainError> {
    let map = parse_body(body)?;
    validate_fields(&map)
}

/// Validate the content fields of an already parsed record.
pub fn validate_fields(map: &Map<String, Value>) -> Result<PostFields, DomainError> {
    let mut fields = FieldChecker::new(map);
    let content = fields.content();
    fields.finish()?;

    content.ok_or_else(|| DomainError::Validation(Vec::new()))
}

/// Validate an update request body. `id` is required and checked first.
pub fn validate_update(body: Option<&str>) -> Result<(String, PostFields), DomainError> {
    let map = parse_body(body)?;
    let mut fields = FieldChecker::new(&map);
    let id = fields.string("id");
    let content = fields.content();
    fields.finish()?;

    id.zip(content)
        .ok_or_else(|| DomainError::Validation(Vec::new()))
}

/// Parse the body into a JSON object.
///
/// Anything that is not an object (absent, blank, `null`, malformed JSON, an
/// array...) is rejected as a whole before any field is looked at.
fn parse_body(body: Option<&str>) -> Result<Map<String, Value>, DomainError> {
    let raw = body.map(str::trim).filter(|b| !b.is_empty());
    let Some(raw) = raw else {
        return Err(DomainError::EmptyBody);
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DomainError::EmptyBody),
        Err(e) => {
            tracing::debug!(error = %e, "Request body is not valid JSON");
            Err(DomainError::EmptyBody)
        }
    }
}

struct FieldChecker<'a> {
    map: &'a Map<String, Value>,
    errors: Vec<String>,
}

impl<'a> FieldChecker<'a> {
    fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            map,
            errors: Vec::new(),
        }
    }

    /// Look up a field, recording "not provided" if it is absent or blank.
    fn provided(&mut self, name: &str) -> Option<&'a Value> {
        let map = self.map;
        match map.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(value) => Some(value),
        }
        .or_else(|| {
            self.errors.push(format!("'{name}' not provided."));
            None
        })
    }

    fn invalid(&mut self, name: &str, kind: &str) {
        self.errors.push(format!("'{name}' must be a {kind}."));
    }

    fn string(&mut self, name: &str) -> Option<String> {
        match self.provided(name)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.invalid(name, "string");
                None
            }
        }
    }

    fn count(&mut self, name: &str) -> Option<u64> {
        let value = self.provided(name)?;
        let count = value.as_u64();
        if count.is_none() {
            self.invalid(name, "non-negative integer");
        }
        count
    }

    fn tags(&mut self, name: &str) -> Option<Vec<String>> {
        match self.provided(name)? {
            Value::Array(items) if items.is_empty() => {
                self.errors.push(format!("'{name}' not provided."));
                None
            }
            Value::Array(items) => {
                let tags: Option<Vec<String>> = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_owned))
                    .collect();
                if tags.is_none() {
                    self.invalid(name, "list of strings");
                }
                tags
            }
            _ => {
                self.invalid(name, "list of strings");
                None
            }
        }
    }

    /// Check every content field, in order, without stopping at the first failure.
    fn content(&mut self) -> Option<PostFields> {
        let title = self.string("title");
        let body = self.string("body");
        let category = self.string("category");
        let likes = self.count("likes");
        let tags = self.tags("tags");

        Some(PostFields {
            title: title?,
            body: body?,
            category: category?,
            likes: likes?,
            tags: tags?,
        })
    }

    fn finish(self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "title": "Hello",
            "body": "First post",
            "category": "news",
            "likes": 3,
            "tags": ["a", "b"]
        })
    }

    fn errors_of(result: Result<PostFields, DomainError>) -> Vec<String> {
        match result {
            Err(DomainError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_create_body() {
        let fields = validate_create(Some(&full_body().to_string())).unwrap();
        assert_eq!(fields.title, "Hello");
        assert_eq!(fields.likes, 3);
        assert_eq!(fields.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        // Every subset of the five content fields.
        for mask in 1u8..32 {
            let mut body = full_body();
            let mut expected = Vec::new();
            for (bit, name) in CONTENT_FIELDS.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    body.as_object_mut().unwrap().remove(*name);
                    expected.push(format!("'{name}' not provided."));
                }
            }

            let errors = errors_of(validate_create(Some(&body.to_string())));
            assert_eq!(errors, expected, "mask {mask:05b}");
        }
    }

    #[test]
    fn test_blank_values_are_not_provided() {
        let body = json!({
            "title": "",
            "body": null,
            "category": "c",
            "likes": "",
            "tags": ""
        });
        let errors = errors_of(validate_create(Some(&body.to_string())));
        assert_eq!(
            errors,
            vec![
                "'title' not provided.",
                "'body' not provided.",
                "'likes' not provided.",
                "'tags' not provided.",
            ]
        );
    }

    #[test]
    fn test_zero_likes_valid_but_empty_tags_not() {
        let body = json!({"title": "t", "body": "b", "category": "c", "likes": 0, "tags": []});
        let errors = errors_of(validate_create(Some(&body.to_string())));
        assert_eq!(errors, vec!["'tags' not provided."]);

        let body = json!({"title": "t", "body": "b", "category": "c", "likes": 0, "tags": ["x"]});
        let fields = validate_create(Some(&body.to_string())).unwrap();
        assert_eq!(fields.likes, 0);
    }

    #[test]
    fn test_wrong_types() {
        let body = json!({
            "title": 7,
            "body": "b",
            "category": "c",
            "likes": -1,
            "tags": ["ok", 2]
        });
        let errors = errors_of(validate_create(Some(&body.to_string())));
        assert_eq!(
            errors,
            vec![
                "'title' must be a string.",
                "'likes' must be a non-negative integer.",
                "'tags' must be a list of strings.",
            ]
        );
    }

    #[test]
    fn test_empty_body_bypasses_field_checks() {
        for body in [None, Some(""), Some("   "), Some("null"), Some("{not json"), Some("[1]")] {
            assert!(
                matches!(validate_create(body), Err(DomainError::EmptyBody)),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn test_client_id_ignored_on_create() {
        let mut body = full_body();
        body["id"] = json!("client-chosen");
        assert!(validate_create(Some(&body.to_string())).is_ok());
    }

    #[test]
    fn test_validate_parsed_record() {
        let record = json!({"title": "", "body": "b", "category": "c", "likes": 0, "tags": []});
        let errors = errors_of(validate_fields(record.as_object().unwrap()));
        assert_eq!(errors, vec!["'title' not provided.", "'tags' not provided."]);

        let fields = validate_fields(full_body().as_object().unwrap()).unwrap();
        assert_eq!(fields.title, "Hello");
    }

    #[test]
    fn test_update_requires_id_first() {
        let body = json!({"title": "t", "body": "b", "category": "c", "likes": 1});
        match validate_update(Some(&body.to_string())) {
            Err(DomainError::Validation(errors)) => {
                assert_eq!(errors, vec!["'id' not provided.", "'tags' not provided."]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_update_body() {
        let mut body = full_body();
        body["id"] = json!("X");
        let (id, fields) = validate_update(Some(&body.to_string())).unwrap();
        assert_eq!(id, "X");
        assert_eq!(fields.category, "news");
    }
}
