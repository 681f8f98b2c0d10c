//! Account handlers.

use serde_json::Value;

use crate::api::AccountApi;
use crate::operations::OperationError;
use crate::rest::{Document, ListParams, ResourceKind};

/// Lists accounts.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn get_account_list(
    api: &AccountApi,
    params: Option<&ListParams>,
) -> Result<Value, OperationError> {
    api.get_account_list(params)
        .await
        .map_err(|e| OperationError::failed("Error fetching account list", e))
}

/// Fetches one account.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn get_account_by_id(
    api: &AccountApi,
    account_id: &str,
    included: &[&str],
) -> Result<Value, OperationError> {
    api.get_account_by_id(account_id, included)
        .await
        .map_err(|e| OperationError::failed("Error fetching account", e))
}

/// Creates an account from raw attributes.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn create_account(api: &AccountApi, attributes: Value) -> Result<Value, OperationError> {
    let document = Document::new(ResourceKind::Account, attributes);
    api.create_account(&document)
        .await
        .map_err(|e| OperationError::failed("Error creating account", e))
}

/// Updates an account from raw attributes.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn update_account(
    api: &AccountApi,
    account_id: &str,
    attributes: Value,
) -> Result<Value, OperationError> {
    let document = Document::with_id(ResourceKind::Account, account_id, attributes);
    api.update_account_by_id(account_id, &document)
        .await
        .map_err(|e| OperationError::failed("Error updating account", e))
}

/// Deletes an account.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn delete_account(api: &AccountApi, account_id: &str) -> Result<Value, OperationError> {
    api.delete_account_by_id(account_id)
        .await
        .map_err(|e| OperationError::failed("Error deleting account", e))
}
