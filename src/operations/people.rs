//! People handlers and the person form.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::PeopleApi;
use crate::operations::OperationError;
use crate::rest::{Document, ListParams, ResourceKind};

/// The attributes a host collects to create or update a person.
///
/// Optional fields left as `None` are omitted from the payload so the API
/// keeps its current values on update.
///
/// `birthday` accepts a plain `YYYY-MM-DD` date or an ISO 8601 datetime such
/// as `1990-05-01T00:00:00.000Z`. A datetime keeps the calendar date written
/// in its own offset, and the payload always carries `YYYY-MM-DD`.
///
/// # Example
///
/// ```rust
/// use pulse_api::operations::PersonFields;
/// use chrono::NaiveDate;
///
/// let fields = PersonFields {
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     birthday: NaiveDate::from_ymd_opt(1815, 12, 10),
///     ..PersonFields::default()
/// };
///
/// let value = serde_json::to_value(&fields).unwrap();
/// assert_eq!(value["birthday"], "1815-12-10");
/// assert!(value.get("middleName").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_birthday",
        skip_serializing_if = "Option::is_none"
    )]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_kids: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit: Option<String>,
}

fn parse_birthday(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

fn deserialize_birthday<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_birthday(raw.trim()).map(Some).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid birthday '{raw}': expected YYYY-MM-DD or an ISO 8601 datetime"
        ))
    })
}

/// Lists people.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn get_people_list(
    api: &PeopleApi,
    params: Option<&ListParams>,
) -> Result<Value, OperationError> {
    api.get_people_list(params)
        .await
        .map_err(|e| OperationError::failed("Error fetching people list", e))
}

/// Fetches one person.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn get_person_by_id(
    api: &PeopleApi,
    person_id: &str,
    included: &[&str],
) -> Result<Value, OperationError> {
    api.get_person_by_id(person_id, included)
        .await
        .map_err(|e| OperationError::failed("Error fetching person", e))
}

/// Creates a person from form fields.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn create_person(
    api: &PeopleApi,
    fields: &PersonFields,
) -> Result<Value, OperationError> {
    let document = Document::new(ResourceKind::People, fields);
    api.create_person(&document)
        .await
        .map_err(|e| OperationError::failed("Error creating person", e))
}

/// Updates a person from form fields.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn update_person(
    api: &PeopleApi,
    person_id: &str,
    fields: &PersonFields,
) -> Result<Value, OperationError> {
    let document = Document::with_id(ResourceKind::People, person_id, fields);
    api.update_person_by_id(person_id, &document)
        .await
        .map_err(|e| OperationError::failed("Error updating person", e))
}

/// Creates a person from raw attributes.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn create_person_from_attributes(
    api: &PeopleApi,
    attributes: Value,
) -> Result<Value, OperationError> {
    let document = Document::new(ResourceKind::People, attributes);
    api.create_person(&document)
        .await
        .map_err(|e| OperationError::failed("Error creating person", e))
}

/// Updates a person from raw attributes.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn update_person_from_attributes(
    api: &PeopleApi,
    person_id: &str,
    attributes: Value,
) -> Result<Value, OperationError> {
    let document = Document::with_id(ResourceKind::People, person_id, attributes);
    api.update_person_by_id(person_id, &document)
        .await
        .map_err(|e| OperationError::failed("Error updating person", e))
}

/// Deletes a person.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn delete_person(api: &PeopleApi, person_id: &str) -> Result<Value, OperationError> {
    api.delete_person_by_id(person_id)
        .await
        .map_err(|e| OperationError::failed("Error deleting person", e))
}
