//! JSON:API request envelopes.
//!
//! Create and update payloads are wrapped as
//! `{"data": {"type": ..., "id": ..., "attributes": {...}}}`. The `id` member
//! is only present on updates.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::path::validate_id;
use crate::rest::{ResourceError, ResourceKind};

/// A JSON:API resource object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceObject<A = Value> {
    /// The resource type string (e.g., `"iam/people"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// The resource id, present for updates only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The resource attributes.
    pub attributes: A,
}

/// A JSON:API top-level document carrying a single resource object.
///
/// # Example
///
/// ```rust
/// use pulse_api::rest::{Document, ResourceKind};
/// use serde_json::json;
///
/// let document = Document::new(ResourceKind::Talent, json!({"name": "X"}));
/// assert_eq!(
///     serde_json::to_value(&document).unwrap(),
///     json!({"data": {"type": "talent/talents", "attributes": {"name": "X"}}})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<A = Value> {
    /// The primary resource object.
    pub data: ResourceObject<A>,
}

impl<A> Document<A> {
    /// Creates a create-style document (no id) for the given resource.
    #[must_use]
    pub fn new(kind: ResourceKind, attributes: A) -> Self {
        Self {
            data: ResourceObject {
                kind: kind.api_type().to_string(),
                id: None,
                attributes,
            },
        }
    }

    /// Creates an update-style document carrying `id`.
    #[must_use]
    pub fn with_id(kind: ResourceKind, id: impl Into<String>, attributes: A) -> Self {
        Self {
            data: ResourceObject {
                kind: kind.api_type().to_string(),
                id: Some(id.into()),
                attributes,
            },
        }
    }
}

impl<A: Serialize> Document<A> {
    /// Converts the attributes into untyped JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the attributes fail to serialize.
    pub fn to_untyped(&self) -> Result<Document<Value>, ResourceError> {
        Ok(Document {
            data: ResourceObject {
                kind: self.data.kind.clone(),
                id: self.data.id.clone(),
                attributes: serde_json::to_value(&self.data.attributes)?,
            },
        })
    }
}

impl Document<Value> {
    /// Validates a create payload and returns the request body.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::TypeMismatch`] if `type` differs from the resource type
    /// - [`ResourceError::UnexpectedId`] if the envelope carries an id
    pub(crate) fn into_create_body(self, kind: ResourceKind) -> Result<Value, ResourceError> {
        self.check_type(kind)?;
        if let Some(id) = self.data.id {
            return Err(ResourceError::UnexpectedId {
                resource: kind.name(),
                id,
            });
        }
        Ok(serde_json::to_value(self)?)
    }

    /// Validates an update payload and returns the request body.
    ///
    /// A missing envelope id is filled in from the path id; a different
    /// envelope id is rejected.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::InvalidId`] if `path_id` is blank
    /// - [`ResourceError::TypeMismatch`] if `type` differs from the resource type
    /// - [`ResourceError::IdMismatch`] if the envelope id differs from `path_id`
    pub(crate) fn into_update_body(
        mut self,
        kind: ResourceKind,
        path_id: &str,
    ) -> Result<Value, ResourceError> {
        let path_id = validate_id(kind, path_id)?;
        self.check_type(kind)?;
        match &self.data.id {
            Some(body_id) if body_id != path_id => {
                return Err(ResourceError::IdMismatch {
                    path_id: path_id.to_string(),
                    body_id: body_id.clone(),
                });
            }
            Some(_) => {}
            None => self.data.id = Some(path_id.to_string()),
        }
        Ok(serde_json::to_value(self)?)
    }

    fn check_type(&self, kind: ResourceKind) -> Result<(), ResourceError> {
        if self.data.kind != kind.api_type() {
            return Err(ResourceError::TypeMismatch {
                expected: kind.api_type(),
                found: self.data.kind.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Name {
        first_name: &'static str,
    }

    #[test]
    fn test_new_document_has_no_id() {
        let document = Document::new(ResourceKind::People, json!({"firstName": "Ada"}));
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(
            value,
            json!({"data": {"type": "iam/people", "attributes": {"firstName": "Ada"}}})
        );
    }

    #[test]
    fn test_typed_attributes_serialize_through_untyped() {
        let document = Document::new(ResourceKind::People, Name { first_name: "Ada" });
        let untyped = document.to_untyped().unwrap();
        assert_eq!(untyped.data.attributes, json!({"firstName": "Ada"}));
    }

    #[test]
    fn test_document_deserializes_from_json() {
        let document: Document = serde_json::from_value(json!({
            "data": {"type": "talent/skills", "id": "5", "attributes": {"level": 3}}
        }))
        .unwrap();

        assert_eq!(document.data.kind, "talent/skills");
        assert_eq!(document.data.id.as_deref(), Some("5"));
    }

    #[test]
    fn test_create_body_keeps_attributes_unchanged() {
        let attributes = json!({"name": "X", "nested": {"a": [1, 2]}});
        let body = Document::new(ResourceKind::Talent, attributes.clone())
            .into_create_body(ResourceKind::Talent)
            .unwrap();

        assert_eq!(body["data"]["type"], "talent/talents");
        assert_eq!(body["data"]["attributes"], attributes);
        assert!(body["data"].get("id").is_none());
    }

    #[test]
    fn test_create_body_rejects_wrong_type() {
        let result = Document::new(ResourceKind::Skill, json!({}))
            .into_create_body(ResourceKind::Language);
        assert!(matches!(
            result,
            Err(ResourceError::TypeMismatch { expected: "talent/languages", found }) if found == "talent/skills"
        ));
    }

    #[test]
    fn test_create_body_rejects_id() {
        let result = Document::with_id(ResourceKind::Skill, "9", json!({}))
            .into_create_body(ResourceKind::Skill);
        assert!(matches!(result, Err(ResourceError::UnexpectedId { .. })));
    }

    #[test]
    fn test_update_body_injects_missing_id() {
        let body = Document::new(ResourceKind::People, json!({"lastName": "L"}))
            .into_update_body(ResourceKind::People, "123")
            .unwrap();
        assert_eq!(body["data"]["id"], "123");
    }

    #[test]
    fn test_update_body_accepts_matching_id() {
        let body = Document::with_id(ResourceKind::People, "123", json!({}))
            .into_update_body(ResourceKind::People, "123")
            .unwrap();
        assert_eq!(body["data"]["id"], "123");
    }

    #[test]
    fn test_update_body_rejects_mismatched_id() {
        let result = Document::with_id(ResourceKind::People, "999", json!({}))
            .into_update_body(ResourceKind::People, "123");
        assert!(matches!(
            result,
            Err(ResourceError::IdMismatch { path_id, body_id }) if path_id == "123" && body_id == "999"
        ));
    }

    #[test]
    fn test_update_body_accepts_padded_id_matching_path() {
        let body = Document::with_id(ResourceKind::People, "42 ", json!({}))
            .into_update_body(ResourceKind::People, "42 ")
            .unwrap();
        assert_eq!(body["data"]["id"], "42 ");
    }

    #[test]
    fn test_update_body_rejects_blank_path_id() {
        let result = Document::new(ResourceKind::People, json!({}))
            .into_update_body(ResourceKind::People, " ");
        assert!(matches!(result, Err(ResourceError::InvalidId { .. })));
    }
}
