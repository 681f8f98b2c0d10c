//! Talent family handlers.
//!
//! One set of handlers serves talents, skills, languages, educations,
//! certifications and experiences; the target is chosen by [`ResourceKind`].
//! Kinds outside [`ResourceKind::TALENT_FAMILY`] are rejected as unsupported.

use serde_json::Value;

use crate::api::TalentApi;
use crate::operations::OperationError;
use crate::rest::{Document, ListParams, ResourceKind};

fn ensure_talent(kind: ResourceKind, operation: &'static str) -> Result<(), OperationError> {
    if ResourceKind::TALENT_FAMILY.contains(&kind) {
        Ok(())
    } else {
        Err(OperationError::Unsupported {
            resource: kind.api_type().to_string(),
            operation,
        })
    }
}

fn label(kind: ResourceKind) -> String {
    kind.name().to_lowercase()
}

/// Lists resources of a talent family `kind`.
///
/// # Errors
///
/// Returns [`OperationError::Unsupported`] for a non-talent kind and
/// [`OperationError::Failed`] if the client call fails.
pub async fn get_list(
    api: &TalentApi,
    kind: ResourceKind,
    params: Option<&ListParams>,
) -> Result<Value, OperationError> {
    ensure_talent(kind, "list")?;
    let result = match kind {
        ResourceKind::Talent => api.get_talent_list(params).await,
        _ => api.list(kind, params).await,
    };
    result.map_err(|e| OperationError::failed(format!("Error fetching {} list", label(kind)), e))
}

/// Fetches one resource of a talent family `kind`.
///
/// # Errors
///
/// Returns [`OperationError::Unsupported`] for a non-talent kind and
/// [`OperationError::Failed`] if the client call fails.
pub async fn get_by_id(
    api: &TalentApi,
    kind: ResourceKind,
    id: &str,
    included: &[&str],
) -> Result<Value, OperationError> {
    ensure_talent(kind, "get")?;
    api.find(kind, id, included)
        .await
        .map_err(|e| OperationError::failed(format!("Error fetching {}", label(kind)), e))
}

/// Creates a resource of a talent family `kind` from raw attributes.
///
/// # Errors
///
/// Returns [`OperationError::Unsupported`] for a non-talent kind and
/// [`OperationError::Failed`] if the client call fails.
pub async fn create(
    api: &TalentApi,
    kind: ResourceKind,
    attributes: Value,
) -> Result<Value, OperationError> {
    ensure_talent(kind, "create")?;
    let document = Document::new(kind, attributes);
    api.create(kind, &document)
        .await
        .map_err(|e| OperationError::failed(format!("Error creating {}", label(kind)), e))
}

/// Updates a resource of a talent family `kind` from raw attributes.
///
/// # Errors
///
/// Returns [`OperationError::Unsupported`] for a non-talent kind and
/// [`OperationError::Failed`] if the client call fails.
pub async fn update(
    api: &TalentApi,
    kind: ResourceKind,
    id: &str,
    attributes: Value,
) -> Result<Value, OperationError> {
    ensure_talent(kind, "update")?;
    let document = Document::with_id(kind, id, attributes);
    api.update(kind, id, &document)
        .await
        .map_err(|e| OperationError::failed(format!("Error updating {}", label(kind)), e))
}

/// Deletes a resource of a talent family `kind`.
///
/// # Errors
///
/// Returns [`OperationError::Unsupported`] for a non-talent kind and
/// [`OperationError::Failed`] if the client call fails.
pub async fn delete(api: &TalentApi, kind: ResourceKind, id: &str) -> Result<Value, OperationError> {
    ensure_talent(kind, "delete")?;
    api.delete(kind, id)
        .await
        .map_err(|e| OperationError::failed(format!("Error deleting {}", label(kind)), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_talent_kinds_are_unsupported() {
        for kind in [ResourceKind::People, ResourceKind::Account, ResourceKind::Activity] {
            assert!(matches!(
                ensure_talent(kind, "list"),
                Err(OperationError::Unsupported { operation: "list", .. })
            ));
        }
        for kind in ResourceKind::TALENT_FAMILY {
            assert!(ensure_talent(kind, "list").is_ok());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(label(ResourceKind::Certification), "certification");
        assert_eq!(label(ResourceKind::Skill), "skill");
    }
}
