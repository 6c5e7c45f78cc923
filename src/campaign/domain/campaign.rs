//! Campaign aggregate root and its mutation payloads.

use super::{Amount, CampaignCategory, CampaignDomainError, CampaignId, CampaignStatus, OwnerId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Longest accepted title, in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Campaign aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    id: CampaignId,
    owner_id: OwnerId,
    title: String,
    description: String,
    target_amount: Amount,
    collected_amount: Amount,
    min_donation: Amount,
    deadline: DateTime<Utc>,
    status: CampaignStatus,
    category: CampaignCategory,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for a new campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDraft {
    /// Owner of the new campaign.
    pub owner_id: OwnerId,
    /// Campaign title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Fundraising goal.
    pub target_amount: Amount,
    /// Smallest accepted donation.
    pub min_donation: Amount,
    /// Fundraising deadline.
    pub deadline: DateTime<Utc>,
    /// Campaign category.
    pub category: CampaignCategory,
}

/// Parameter object for reconstructing a persisted campaign aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCampaignData {
    /// Persisted campaign identifier.
    pub id: CampaignId,
    /// Persisted owner identifier.
    pub owner_id: OwnerId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted fundraising goal.
    pub target_amount: Amount,
    /// Persisted amount collected so far.
    pub collected_amount: Amount,
    /// Persisted minimum donation.
    pub min_donation: Amount,
    /// Persisted deadline.
    pub deadline: DateTime<Utc>,
    /// Persisted lifecycle status.
    pub status: CampaignStatus,
    /// Persisted category.
    pub category: CampaignCategory,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted deletion marker, if any.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Campaign {
    /// Creates a new active campaign.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignDomainError::EmptyTitle`] when the title is blank and
    /// [`CampaignDomainError::TitleTooLong`] when it exceeds
    /// [`MAX_TITLE_LENGTH`] characters.
    pub fn new(draft: CampaignDraft, clock: &impl Clock) -> Result<Self, CampaignDomainError> {
        let CampaignDraft {
            owner_id,
            title,
            description,
            target_amount,
            min_donation,
            deadline,
            category,
        } = draft;

        Self::validate_title(&title)?;

        let timestamp = clock.utc();
        Ok(Self {
            id: CampaignId::new(),
            owner_id,
            title,
            description,
            target_amount,
            collected_amount: Amount::ZERO,
            min_donation,
            deadline,
            status: CampaignStatus::Active,
            category,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        })
    }

    /// Reconstructs a campaign from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCampaignData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            target_amount: data.target_amount,
            collected_amount: data.collected_amount,
            min_donation: data.min_donation,
            deadline: data.deadline,
            status: data.status,
            category: data.category,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Checks a title for creation or replacement.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignDomainError::EmptyTitle`] for a blank title and
    /// [`CampaignDomainError::TitleTooLong`] past [`MAX_TITLE_LENGTH`]
    /// characters.
    pub fn validate_title(title: &str) -> Result<(), CampaignDomainError> {
        if title.trim().is_empty() {
            return Err(CampaignDomainError::EmptyTitle);
        }
        let length = title.chars().count();
        if length > MAX_TITLE_LENGTH {
            return Err(CampaignDomainError::TitleTooLong {
                length,
                max: MAX_TITLE_LENGTH,
            });
        }
        Ok(())
    }

    /// Returns the campaign identifier.
    #[must_use]
    pub const fn id(&self) -> CampaignId {
        self.id
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the fundraising goal.
    #[must_use]
    pub const fn target_amount(&self) -> Amount {
        self.target_amount
    }

    /// Returns the externally maintained collected amount.
    #[must_use]
    pub const fn collected_amount(&self) -> Amount {
        self.collected_amount
    }

    /// Returns the minimum donation.
    #[must_use]
    pub const fn min_donation(&self) -> Amount {
        self.min_donation
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> CampaignStatus {
        self.status
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> CampaignCategory {
        self.category
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the deletion marker, if the campaign was soft-deleted.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns `true` once the campaign has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Applies a patch unless the campaign is in a terminal status.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignDomainError::TerminalStatus`] when the campaign is
    /// completed or cancelled. The campaign is left untouched.
    pub fn apply_patch(
        &mut self,
        patch: &CampaignPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<(), CampaignDomainError> {
        if self.status.is_terminal() {
            return Err(CampaignDomainError::TerminalStatus {
                campaign_id: self.id,
                status: self.status,
            });
        }

        if let Some(title) = &patch.title {
            title.clone_into(&mut self.title);
        }
        if let Some(description) = &patch.description {
            description.clone_into(&mut self.description);
        }
        if let Some(target_amount) = patch.target_amount {
            self.target_amount = target_amount;
        }
        if let Some(min_donation) = patch.min_donation {
            self.min_donation = min_donation;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        self.updated_at = updated_at;
        Ok(())
    }

    /// Soft-deletes the campaign: status becomes cancelled and the deletion
    /// marker is set. Applies regardless of the current status.
    pub fn mark_deleted(&mut self, deleted_at: DateTime<Utc>) {
        self.status = CampaignStatus::Cancelled;
        self.deleted_at = Some(deleted_at);
        self.updated_at = deleted_at;
    }
}

/// Partial update of a campaign's mutable fields.
///
/// `None` leaves the corresponding field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement fundraising goal.
    pub target_amount: Option<Amount>,
    /// Replacement minimum donation.
    pub min_donation: Option<Amount>,
    /// Replacement deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Replacement status.
    pub status: Option<CampaignStatus>,
    /// Replacement category.
    pub category: Option<CampaignCategory>,
}

impl CampaignPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the fundraising goal.
    #[must_use]
    pub const fn with_target_amount(mut self, amount: Amount) -> Self {
        self.target_amount = Some(amount);
        self
    }

    /// Sets the minimum donation.
    #[must_use]
    pub const fn with_min_donation(mut self, amount: Amount) -> Self {
        self.min_donation = Some(amount);
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: CampaignStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: CampaignCategory) -> Self {
        self.category = Some(category);
        self
    }
}
