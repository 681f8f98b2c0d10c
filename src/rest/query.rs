//! List and include options for resource queries.
//!
//! Serialization follows the Pulse API conventions:
//!
//! | Option        | Query parameter          |
//! |---------------|--------------------------|
//! | filter        | `filter[key]=values`     |
//! | sparse fields | `fields[key]=fields`     |
//! | sort          | `sort=...`               |
//! | page number   | `page[number]=...`       |
//! | page size     | `page[size]=...`         |
//! | included      | `included=name` repeated |

use serde::Deserialize;

use crate::clients::QueryParams;

/// A `filter[key]=values` constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Filter {
    /// The attribute being filtered.
    pub key: String,
    /// The filter value (comma-separated when matching several values).
    pub values: String,
}

/// A `fields[key]=fields` sparse fieldset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FieldSet {
    /// The resource type the fieldset applies to.
    pub key: String,
    /// Comma-separated attribute names.
    pub fields: String,
}

/// Filtering, sorting, pagination, field selection, and relation inclusion
/// for list requests.
///
/// # Example
///
/// ```rust
/// use pulse_api::rest::ListParams;
///
/// let params = ListParams::new()
///     .filter("status", "active")
///     .sort("-createdAt")
///     .page(2, 50)
///     .include("account");
///
/// assert_eq!(
///     params.to_query().to_query_string(),
///     "filter%5Bstatus%5D=active&sort=-createdAt&page%5Bnumber%5D=2&page%5Bsize%5D=50&included=account"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Filters, serialized in order.
    pub filters: Vec<Filter>,
    /// Sparse fieldsets, serialized in order.
    pub fields: Vec<FieldSet>,
    /// Sort expression.
    pub sort: Option<String>,
    /// 1-based page number.
    pub page_number: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Related resources to side-load.
    pub included: Vec<String>,
}

impl ListParams {
    /// Creates empty list options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `filter[key]=values` constraint.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, values: impl Into<String>) -> Self {
        self.filters.push(Filter {
            key: key.into(),
            values: values.into(),
        });
        self
    }

    /// Adds a `fields[key]=fields` sparse fieldset.
    #[must_use]
    pub fn fields(mut self, key: impl Into<String>, fields: impl Into<String>) -> Self {
        self.fields.push(FieldSet {
            key: key.into(),
            fields: fields.into(),
        });
        self
    }

    /// Sets the sort expression.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the page number and size.
    #[must_use]
    pub const fn page(mut self, number: u32, size: u32) -> Self {
        self.page_number = Some(number);
        self.page_size = Some(size);
        self
    }

    /// Adds a relation to side-load.
    #[must_use]
    pub fn include(mut self, relation: impl Into<String>) -> Self {
        self.included.push(relation.into());
        self
    }

    /// Serializes these options into query parameters.
    ///
    /// Blank sort values and filters/fieldsets with blank keys are skipped.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();

        for filter in self.filters.iter().filter(|f| !f.key.trim().is_empty()) {
            query.push(format!("filter[{}]", filter.key), filter.values.as_str());
        }
        for fieldset in self.fields.iter().filter(|f| !f.key.trim().is_empty()) {
            query.push(format!("fields[{}]", fieldset.key), fieldset.fields.as_str());
        }
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.trim().is_empty()) {
            query.push("sort", sort);
        }
        if let Some(number) = self.page_number {
            query.push("page[number]", number.to_string());
        }
        if let Some(size) = self.page_size {
            query.push("page[size]", size.to_string());
        }
        query.extend(included_query(&self.included).iter());

        query
    }
}

/// Serializes an `included` relation list as repeated `included=` pairs.
#[must_use]
pub fn included_query<S: AsRef<str>>(included: &[S]) -> QueryParams {
    let mut query = QueryParams::new();
    query.push_all("included", included.iter().map(|s| s.as_ref().to_string()));
    query
}

#[derive(Debug, Default, Deserialize)]
struct FilterCollection {
    #[serde(default)]
    filter: Vec<Filter>,
}

#[derive(Debug, Default, Deserialize)]
struct FieldCollection {
    #[serde(default)]
    field: Vec<FieldSet>,
}

/// The nested "additional fields" shape produced by workflow forms.
///
/// ```json
/// {
///   "sort": "-createdAt",
///   "pageNumber": 1,
///   "pageSize": 20,
///   "filters": { "filter": [{ "key": "status", "values": "open" }] },
///   "fields": { "field": [{ "key": "workflow/activities", "fields": "name" }] },
///   "included": ["account"]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFields {
    #[serde(default)]
    sort: Option<String>,
    #[serde(default)]
    page_number: Option<u32>,
    #[serde(default)]
    page_size: Option<u32>,
    #[serde(default)]
    filters: FilterCollection,
    #[serde(default)]
    fields: FieldCollection,
    #[serde(default)]
    included: Vec<String>,
}

impl From<AdditionalFields> for ListParams {
    fn from(fields: AdditionalFields) -> Self {
        Self {
            filters: fields.filters.filter,
            fields: fields.fields.field,
            sort: fields.sort,
            page_number: fields.page_number,
            page_size: fields.page_size,
            included: fields.included,
        }
    }
}
