//! Client for the talent family: talents, skills, languages, educations,
//! certifications and experiences.

use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use crate::api::PulseApi;
use crate::rest::{Document, ListParams, ResourceError, ResourceKind};

/// Talent resources under `/api/v3/talent/...`.
///
/// Dereferences to [`PulseApi`] for raw requests.
///
/// # Example
///
/// ```rust,ignore
/// let talent = TalentApi::new(&config)?;
/// let skills = talent.get_skills_list(Some(&ListParams::new().include("talent"))).await?;
/// ```
#[derive(Clone, Debug)]
pub struct TalentApi {
    api: PulseApi,
}

impl TalentApi {
    /// Creates a talent client bound to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`](crate::clients::HttpError::Transport)
    /// if the HTTP client cannot be created.
    pub fn new(config: &crate::PulseConfig) -> Result<Self, crate::clients::HttpError> {
        Ok(Self::from_api(PulseApi::new(config)?))
    }

    /// Wraps a generic client.
    #[must_use]
    pub const fn from_api(api: PulseApi) -> Self {
        Self { api }
    }

    // Talents

    /// Lists talents.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_talent_list(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Value, ResourceError> {
        tracing::debug!(included = ?params.map(|p| &p.included), "Fetching talent list");
        self.api.list(ResourceKind::Talent, params).await
    }

    /// Fetches a talent by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn get_talent_by_id(
        &self,
        talent_id: &str,
        included: &[&str],
    ) -> Result<Value, ResourceError> {
        self.api.find(ResourceKind::Talent, talent_id, included).await
    }

    /// Creates a talent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed envelope or a failed request.
    pub async fn create_talent<A: Serialize + Sync>(
        &self,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.create(ResourceKind::Talent, document).await
    }

    /// Updates a talent by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed request or a failed request.
    pub async fn update_talent_by_id<A: Serialize + Sync>(
        &self,
        talent_id: &str,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api
            .update(ResourceKind::Talent, talent_id, document)
            .await
    }

    /// Deletes a talent by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn delete_talent_by_id(&self, talent_id: &str) -> Result<Value, ResourceError> {
        self.api.delete(ResourceKind::Talent, talent_id).await
    }

    // Skills

    /// Lists skills.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_skills_list(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Value, ResourceError> {
        self.api.list(ResourceKind::Skill, params).await
    }

    /// Fetches a skill by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn get_skill_by_id(
        &self,
        skill_id: &str,
        included: &[&str],
    ) -> Result<Value, ResourceError> {
        self.api.find(ResourceKind::Skill, skill_id, included).await
    }

    /// Creates a skill.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed envelope or a failed request.
    pub async fn create_skill<A: Serialize + Sync>(
        &self,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.create(ResourceKind::Skill, document).await
    }

    /// Updates a skill by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed request or a failed request.
    pub async fn update_skill_by_id<A: Serialize + Sync>(
        &self,
        skill_id: &str,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.update(ResourceKind::Skill, skill_id, document).await
    }

    /// Deletes a skill by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn delete_skill_by_id(&self, skill_id: &str) -> Result<Value, ResourceError> {
        self.api.delete(ResourceKind::Skill, skill_id).await
    }

    // Languages

    /// Lists languages.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_languages_list(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Value, ResourceError> {
        self.api.list(ResourceKind::Language, params).await
    }

    /// Fetches a language by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn get_language_by_id(
        &self,
        language_id: &str,
        included: &[&str],
    ) -> Result<Value, ResourceError> {
        self.api
            .find(ResourceKind::Language, language_id, included)
            .await
    }

    /// Creates a language.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed envelope or a failed request.
    pub async fn create_language<A: Serialize + Sync>(
        &self,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.create(ResourceKind::Language, document).await
    }

    /// Updates a language by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed request or a failed request.
    pub async fn update_language_by_id<A: Serialize + Sync>(
        &self,
        language_id: &str,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api
            .update(ResourceKind::Language, language_id, document)
            .await
    }

    /// Deletes a language by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn delete_language_by_id(&self, language_id: &str) -> Result<Value, ResourceError> {
        self.api.delete(ResourceKind::Language, language_id).await
    }

    // Educations

    /// Lists education entries.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_education_list(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Value, ResourceError> {
        self.api.list(ResourceKind::Education, params).await
    }

    /// Fetches an education entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn get_education_by_id(
        &self,
        education_id: &str,
        included: &[&str],
    ) -> Result<Value, ResourceError> {
        self.api
            .find(ResourceKind::Education, education_id, included)
            .await
    }

    /// Creates an education entry.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed envelope or a failed request.
    pub async fn create_education<A: Serialize + Sync>(
        &self,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.create(ResourceKind::Education, document).await
    }

    /// Updates an education entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed request or a failed request.
    pub async fn update_education_by_id<A: Serialize + Sync>(
        &self,
        education_id: &str,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api
            .update(ResourceKind::Education, education_id, document)
            .await
    }

    /// Deletes an education entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn delete_education_by_id(
        &self,
        education_id: &str,
    ) -> Result<Value, ResourceError> {
        self.api.delete(ResourceKind::Education, education_id).await
    }

    // Certifications

    /// Lists certifications.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_certification_list(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Value, ResourceError> {
        self.api.list(ResourceKind::Certification, params).await
    }

    /// Fetches a certification by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn get_certification_by_id(
        &self,
        certification_id: &str,
        included: &[&str],
    ) -> Result<Value, ResourceError> {
        self.api
            .find(ResourceKind::Certification, certification_id, included)
            .await
    }

    /// Creates a certification.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed envelope or a failed request.
    pub async fn create_certification<A: Serialize + Sync>(
        &self,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.create(ResourceKind::Certification, document).await
    }

    /// Updates a certification by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed request or a failed request.
    pub async fn update_certification_by_id<A: Serialize + Sync>(
        &self,
        certification_id: &str,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api
            .update(ResourceKind::Certification, certification_id, document)
            .await
    }

    /// Deletes a certification by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn delete_certification_by_id(
        &self,
        certification_id: &str,
    ) -> Result<Value, ResourceError> {
        self.api
            .delete(ResourceKind::Certification, certification_id)
            .await
    }

    // Experiences

    /// Lists experience entries.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_experience_list(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Value, ResourceError> {
        self.api.list(ResourceKind::Experience, params).await
    }

    /// Fetches an experience entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn get_experience_by_id(
        &self,
        experience_id: &str,
        included: &[&str],
    ) -> Result<Value, ResourceError> {
        self.api
            .find(ResourceKind::Experience, experience_id, included)
            .await
    }

    /// Creates an experience entry.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed envelope or a failed request.
    pub async fn create_experience<A: Serialize + Sync>(
        &self,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.create(ResourceKind::Experience, document).await
    }

    /// Updates an experience entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed request or a failed request.
    pub async fn update_experience_by_id<A: Serialize + Sync>(
        &self,
        experience_id: &str,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api
            .update(ResourceKind::Experience, experience_id, document)
            .await
    }

    /// Deletes an experience entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn delete_experience_by_id(
        &self,
        experience_id: &str,
    ) -> Result<Value, ResourceError> {
        self.api.delete(ResourceKind::Experience, experience_id).await
    }
}

impl Deref for TalentApi {
    type Target = PulseApi;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
