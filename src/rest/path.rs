//! Resource catalogue and path building for the Pulse REST API.
//!
//! Every resource family lives under `/api/v3/{api_type}`, where `api_type`
//! is also the JSON:API `type` string carried in request envelopes.
//!
//! # Example
//!
//! ```rust
//! use pulse_api::rest::{ResourceKind, ResourceOperation};
//! use pulse_api::clients::HttpMethod;
//!
//! assert_eq!(ResourceKind::People.collection_path(), "/api/v3/iam/people");
//! assert_eq!(
//!     ResourceKind::People.member_path("123").unwrap(),
//!     "/api/v3/iam/people/123"
//! );
//! assert_eq!(ResourceOperation::Update.http_method(), HttpMethod::Patch);
//! ```

use std::fmt;

use crate::clients::HttpMethod;
use crate::rest::ResourceError;

/// Operations that can be performed on a resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List resources (GET `{base}`).
    List,
    /// Fetch a single resource (GET `{base}/{id}`).
    Find,
    /// Create a resource (POST `{base}`).
    Create,
    /// Update a resource (PATCH `{base}/{id}`).
    Update,
    /// Delete a resource (DELETE `{base}/{id}`).
    Delete,
}

impl ResourceOperation {
    /// Returns the HTTP method used for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::List | Self::Find => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Patch,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Find => "find",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resource families exposed by the Pulse API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// People records (`iam/people`).
    People,
    /// User accounts (`iam/accounts`).
    Account,
    /// Talent profiles (`talent/talents`).
    Talent,
    /// Talent skills (`talent/skills`).
    Skill,
    /// Talent languages (`talent/languages`).
    Language,
    /// Talent education entries (`talent/educations`).
    Education,
    /// Talent certifications (`talent/certifications`).
    Certification,
    /// Talent work experience (`talent/experiences`).
    Experience,
    /// Workflow activities (`workflow/activities`).
    Activity,
}

impl ResourceKind {
    /// Every resource kind, in catalogue order.
    pub const ALL: [Self; 9] = [
        Self::People,
        Self::Account,
        Self::Talent,
        Self::Skill,
        Self::Language,
        Self::Education,
        Self::Certification,
        Self::Experience,
        Self::Activity,
    ];

    /// The talent family resources served by the talent client.
    pub const TALENT_FAMILY: [Self; 6] = [
        Self::Talent,
        Self::Skill,
        Self::Language,
        Self::Education,
        Self::Certification,
        Self::Experience,
    ];

    /// Returns the human-readable resource name used in messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::People => "Person",
            Self::Account => "Account",
            Self::Talent => "Talent",
            Self::Skill => "Skill",
            Self::Language => "Language",
            Self::Education => "Education",
            Self::Certification => "Certification",
            Self::Experience => "Experience",
            Self::Activity => "Activity",
        }
    }

    /// Returns the JSON:API `type` string for this resource.
    #[must_use]
    pub const fn api_type(&self) -> &'static str {
        match self {
            Self::People => "iam/people",
            Self::Account => "iam/accounts",
            Self::Talent => "talent/talents",
            Self::Skill => "talent/skills",
            Self::Language => "talent/languages",
            Self::Education => "talent/educations",
            Self::Certification => "talent/certifications",
            Self::Experience => "talent/experiences",
            Self::Activity => "workflow/activities",
        }
    }

    /// Returns the collection path, e.g. `/api/v3/iam/people`.
    #[must_use]
    pub const fn collection_path(&self) -> &'static str {
        match self {
            Self::People => "/api/v3/iam/people",
            Self::Account => "/api/v3/iam/accounts",
            Self::Talent => "/api/v3/talent/talents",
            Self::Skill => "/api/v3/talent/skills",
            Self::Language => "/api/v3/talent/languages",
            Self::Education => "/api/v3/talent/educations",
            Self::Certification => "/api/v3/talent/certifications",
            Self::Experience => "/api/v3/talent/experiences",
            Self::Activity => "/api/v3/workflow/activities",
        }
    }

    /// Returns the path of a single resource, e.g. `/api/v3/iam/people/123`.
    ///
    /// The id is percent-encoded as one path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] if `id` is empty or blank.
    pub fn member_path(&self, id: &str) -> Result<String, ResourceError> {
        let id = validate_id(*self, id)?;
        Ok(format!(
            "{}/{}",
            self.collection_path(),
            urlencoding::encode(id)
        ))
    }

    /// Returns the path of a sub-resource, e.g. `/api/v3/workflow/activities/7/assignments`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] if `id` is empty or blank.
    pub fn sub_path(&self, id: &str, segment: &str) -> Result<String, ResourceError> {
        Ok(format!("{}/{segment}", self.member_path(id)?))
    }

    /// Looks up a resource kind by the identifier a host uses for it.
    ///
    /// Accepts singular and plural spellings (`person`/`people`,
    /// `skill`/`skills`, ...). Matching is case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "people" | "person" => Some(Self::People),
            "account" | "accounts" => Some(Self::Account),
            "talent" | "talents" => Some(Self::Talent),
            "skill" | "skills" => Some(Self::Skill),
            "language" | "languages" => Some(Self::Language),
            "education" | "educations" => Some(Self::Education),
            "certification" | "certifications" => Some(Self::Certification),
            "experience" | "experiences" => Some(Self::Experience),
            "activity" | "activities" => Some(Self::Activity),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_type())
    }
}

/// Checks that an identifier is usable as a path segment.
///
/// Blank ids are rejected; any other id is used exactly as given.
pub(crate) fn validate_id(kind: ResourceKind, id: &str) -> Result<&str, ResourceError> {
    if id.trim().is_empty() {
        return Err(ResourceError::InvalidId {
            resource: kind.name(),
        });
    }
    Ok(id)
}
