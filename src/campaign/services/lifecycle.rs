//! Service layer mapping wire requests onto the campaign repository.

use super::{
    error::{CampaignServiceError, CampaignServiceResult},
    messages::{
        CampaignMessage, CreateCampaignRequest, CreateCampaignResponse, DeleteCampaignRequest,
        DeleteCampaignResponse, GetCampaignByIdRequest, GetCampaignByIdResponse,
        ListCampaignsByOwnerRequest, ListCampaignsByOwnerResponse, UpdateCampaignRequest,
        UpdateCampaignResponse,
    },
};
use crate::campaign::{
    domain::{
        Amount, Campaign, CampaignCategory, CampaignDraft, CampaignId, CampaignPatch,
        CampaignStatus, OwnerId,
    },
    ports::CampaignRepository,
};
use mockable::Clock;
use std::sync::Arc;

/// Campaign lifecycle orchestration service.
#[derive(Clone)]
pub struct CampaignLifecycleService<R, C>
where
    R: CampaignRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CampaignLifecycleService<R, C>
where
    R: CampaignRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new campaign lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates an active campaign for the requesting owner.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignServiceError::Domain`] when the title is blank or too
    /// long or an amount is negative, and [`CampaignServiceError::Repository`] when the
    /// repository rejects persistence.
    pub async fn create(
        &self,
        request: CreateCampaignRequest,
    ) -> CampaignServiceResult<CreateCampaignResponse> {
        let CreateCampaignRequest {
            owner_id,
            title,
            description,
            target_amount,
            min_donation,
            deadline,
            category,
        } = request;

        let draft = CampaignDraft {
            owner_id: OwnerId::new(owner_id),
            title,
            description,
            target_amount: Amount::new(target_amount)?,
            min_donation: Amount::new(min_donation)?,
            deadline,
            category: CampaignCategory::from_wire(category),
        };
        let campaign = Campaign::new(draft, &*self.clock)?;
        let created = self.repository.create(&campaign).await?;

        tracing::info!(
            campaign_id = %created.id(),
            owner_id = %created.owner_id(),
            category = %created.category(),
            "campaign created"
        );
        Ok(CreateCampaignResponse {
            created_campaign: CampaignMessage::from(&created),
        })
    }

    /// Fetches one campaign, including soft-deleted ones.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignServiceError::InvalidCampaignId`] for a malformed
    /// identifier and [`CampaignServiceError::Repository`] when the campaign
    /// does not exist or the lookup fails.
    pub async fn get_by_id(
        &self,
        request: GetCampaignByIdRequest,
    ) -> CampaignServiceResult<GetCampaignByIdResponse> {
        let id = parse_campaign_id(&request.id)?;
        let campaign = self.repository.get_by_id(id).await?;
        tracing::debug!(campaign_id = %id, "campaign fetched");
        Ok(GetCampaignByIdResponse {
            campaign: CampaignMessage::from(&campaign),
        })
    }

    /// Lists the campaigns of one owner. No match is an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignServiceError::Repository`] when the lookup fails.
    pub async fn list_by_owner(
        &self,
        request: ListCampaignsByOwnerRequest,
    ) -> CampaignServiceResult<ListCampaignsByOwnerResponse> {
        let owner_id = OwnerId::new(request.owner_id);
        let campaigns = self.repository.find_by_owner(owner_id).await?;
        tracing::debug!(%owner_id, count = campaigns.len(), "campaigns listed");
        Ok(ListCampaignsByOwnerResponse {
            campaigns: campaigns.iter().map(CampaignMessage::from).collect(),
        })
    }

    /// Applies an owner-scoped update.
    ///
    /// A request asking for the completed status is refused before anything
    /// else is looked at; completion is driven from outside this service.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignServiceError::CompletionNotPermitted`] for a completed
    /// status, [`CampaignServiceError::InvalidCampaignId`] or
    /// [`CampaignServiceError::Domain`] for malformed input, and
    /// [`CampaignServiceError::Repository`] when the campaign is missing,
    /// terminal or owned by someone else.
    pub async fn update(
        &self,
        request: UpdateCampaignRequest,
    ) -> CampaignServiceResult<UpdateCampaignResponse> {
        let status = CampaignStatus::from_wire(request.status);
        if status == CampaignStatus::Completed {
            tracing::warn!(
                campaign_id = %request.id,
                owner_id = request.owner_id,
                "rejected client request to complete campaign"
            );
            return Err(CampaignServiceError::CompletionNotPermitted);
        }

        let id = parse_campaign_id(&request.id)?;
        let owner_id = OwnerId::new(request.owner_id);
        let patch = patch_from_request(request, status)?;

        let updated = self
            .repository
            .update(id, owner_id, &patch, self.clock.utc())
            .await
            .inspect_err(|err| {
                tracing::warn!(campaign_id = %id, %owner_id, error = %err, "campaign update rejected");
            })?;

        tracing::info!(
            campaign_id = %id,
            %owner_id,
            status = %updated.status(),
            "campaign updated"
        );
        Ok(UpdateCampaignResponse {
            updated_campaign: CampaignMessage::from(&updated),
        })
    }

    /// Soft-deletes a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignServiceError::InvalidCampaignId`] for a malformed
    /// identifier and [`CampaignServiceError::Repository`] when the campaign
    /// does not exist or the write fails.
    pub async fn delete(
        &self,
        request: DeleteCampaignRequest,
    ) -> CampaignServiceResult<DeleteCampaignResponse> {
        let id = parse_campaign_id(&request.id)?;
        self.repository.delete(id, self.clock.utc()).await?;
        tracing::info!(campaign_id = %id, "campaign cancelled and marked deleted");
        Ok(DeleteCampaignResponse::default())
    }
}

fn parse_campaign_id(raw: &str) -> CampaignServiceResult<CampaignId> {
    raw.parse()
        .map_err(|_| CampaignServiceError::InvalidCampaignId(raw.to_owned()))
}

/// Builds a patch from the non-zero fields of an update request.
///
/// A supplied title obeys the same rules as at creation.
fn patch_from_request(
    request: UpdateCampaignRequest,
    status: CampaignStatus,
) -> CampaignServiceResult<CampaignPatch> {
    let UpdateCampaignRequest {
        title,
        description,
        target_amount,
        min_donation,
        deadline,
        category,
        ..
    } = request;

    let mut patch = CampaignPatch::new();
    if !title.is_empty() {
        Campaign::validate_title(&title)?;
        patch = patch.with_title(title);
    }
    if !description.is_empty() {
        patch = patch.with_description(description);
    }
    if target_amount != 0 {
        patch = patch.with_target_amount(Amount::new(target_amount)?);
    }
    if min_donation != 0 {
        patch = patch.with_min_donation(Amount::new(min_donation)?);
    }
    if let Some(deadline) = deadline {
        patch = patch.with_deadline(deadline);
    }
    if status != CampaignStatus::Unspecified {
        patch = patch.with_status(status);
    }
    let category = CampaignCategory::from_wire(category);
    if category != CampaignCategory::Unspecified {
        patch = patch.with_category(category);
    }
    Ok(patch)
}
