//! `PostgreSQL` repository implementation for campaign storage.

use super::{
    models::{CampaignChangeset, CampaignRow, NewCampaignRow},
    schema::campaigns,
};
use crate::campaign::{
    domain::{
        Amount, Campaign, CampaignCategory, CampaignId, CampaignPatch, CampaignStatus, OwnerId,
        PersistedCampaignData,
    },
    ports::{CampaignRepository, CampaignRepositoryError, CampaignRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by campaign adapters.
pub type CampaignPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed campaign repository.
///
/// Update and delete are single conditional `UPDATE` statements; the affected
/// row decides the outcome, so no guard is evaluated outside the write.
#[derive(Debug, Clone)]
pub struct PostgresCampaignRepository {
    pool: CampaignPgPool,
}

impl PostgresCampaignRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CampaignPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CampaignRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CampaignRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CampaignRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CampaignRepositoryError::persistence)?
    }
}

#[async_trait]
impl CampaignRepository for PostgresCampaignRepository {
    async fn create(&self, campaign: &Campaign) -> CampaignRepositoryResult<Campaign> {
        let campaign_id = campaign.id();
        let new_row = to_new_row(campaign);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(campaigns::table)
                .values(&new_row)
                .returning(CampaignRow::as_returning())
                .get_result::<CampaignRow>(connection)
                .optional()
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CampaignRepositoryError::DuplicateCampaign(campaign_id)
                    }
                    _ => CampaignRepositoryError::persistence(err),
                })?
                .ok_or(CampaignRepositoryError::CreationFailed(campaign_id))?;
            row_to_campaign(row)
        })
        .await
    }

    async fn get_by_id(&self, id: CampaignId) -> CampaignRepositoryResult<Campaign> {
        self.run_blocking(move |connection| {
            find_campaign_row(connection, id)?
                .map(row_to_campaign)
                .transpose()?
                .ok_or(CampaignRepositoryError::NotFound(id))
        })
        .await
    }

    async fn find_by_owner(&self, owner_id: OwnerId) -> CampaignRepositoryResult<Vec<Campaign>> {
        self.run_blocking(move |connection| {
            let rows = campaigns::table
                .filter(campaigns::owner_id.eq(owner_id.value()))
                .order((campaigns::created_at.asc(), campaigns::id.asc()))
                .select(CampaignRow::as_select())
                .load::<CampaignRow>(connection)
                .map_err(CampaignRepositoryError::persistence)?;
            rows.into_iter().map(row_to_campaign).collect()
        })
        .await
    }

    async fn update(
        &self,
        id: CampaignId,
        owner_id: OwnerId,
        patch: &CampaignPatch,
        updated_at: DateTime<Utc>,
    ) -> CampaignRepositoryResult<Campaign> {
        let changeset = to_changeset(patch, updated_at);

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                campaigns::table
                    .filter(campaigns::id.eq(id.into_inner()))
                    .filter(campaigns::owner_id.eq(owner_id.value()))
                    .filter(campaigns::status.ne(CampaignStatus::Completed.as_persisted()))
                    .filter(campaigns::status.ne(CampaignStatus::Cancelled.as_persisted())),
            )
            .set(&changeset)
            .returning(CampaignRow::as_returning())
            .get_result::<CampaignRow>(connection)
            .optional()
            .map_err(CampaignRepositoryError::persistence)?;

            match updated {
                Some(row) => row_to_campaign(row),
                None => Err(classify_rejected_update(connection, id, owner_id)?),
            }
        })
        .await
    }

    async fn delete(
        &self,
        id: CampaignId,
        deleted_at: DateTime<Utc>,
    ) -> CampaignRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::update(campaigns::table.filter(campaigns::id.eq(id.into_inner())))
                .set((
                    campaigns::status.eq(CampaignStatus::Cancelled.as_persisted()),
                    campaigns::deleted_at.eq(Some(deleted_at)),
                    campaigns::updated_at.eq(deleted_at),
                ))
                .execute(connection)
                .map_err(CampaignRepositoryError::persistence)?;

            if affected == 0 {
                return Err(CampaignRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// Explains why a guarded update matched no row.
fn classify_rejected_update(
    connection: &mut PgConnection,
    id: CampaignId,
    owner_id: OwnerId,
) -> CampaignRepositoryResult<CampaignRepositoryError> {
    let Some(row) = find_campaign_row(connection, id)? else {
        return Ok(CampaignRepositoryError::NotFound(id));
    };

    let status = CampaignStatus::from_persisted(&row.status);
    if status.is_terminal() {
        return Ok(CampaignRepositoryError::TerminalStatus { id, status });
    }
    Ok(CampaignRepositoryError::OwnerMismatch { id, owner_id })
}

fn find_campaign_row(
    connection: &mut PgConnection,
    id: CampaignId,
) -> CampaignRepositoryResult<Option<CampaignRow>> {
    campaigns::table
        .filter(campaigns::id.eq(id.into_inner()))
        .select(CampaignRow::as_select())
        .first::<CampaignRow>(connection)
        .optional()
        .map_err(CampaignRepositoryError::persistence)
}

fn to_new_row(campaign: &Campaign) -> NewCampaignRow {
    NewCampaignRow {
        id: campaign.id().into_inner(),
        owner_id: campaign.owner_id().value(),
        title: campaign.title().to_owned(),
        description: campaign.description().to_owned(),
        target_amount: campaign.target_amount().value(),
        collected_amount: campaign.collected_amount().value(),
        min_donation: campaign.min_donation().value(),
        deadline: campaign.deadline(),
        status: campaign.status().as_persisted().to_owned(),
        category: campaign.category().as_persisted().to_owned(),
        created_at: campaign.created_at(),
        updated_at: campaign.updated_at(),
        deleted_at: campaign.deleted_at(),
    }
}

fn to_changeset(patch: &CampaignPatch, updated_at: DateTime<Utc>) -> CampaignChangeset {
    CampaignChangeset {
        title: patch.title.clone(),
        description: patch.description.clone(),
        target_amount: patch.target_amount.map(Amount::value),
        min_donation: patch.min_donation.map(Amount::value),
        deadline: patch.deadline,
        status: patch.status.map(|status| status.as_persisted().to_owned()),
        category: patch.category.map(|category| category.as_persisted().to_owned()),
        updated_at,
    }
}

fn row_to_campaign(row: CampaignRow) -> CampaignRepositoryResult<Campaign> {
    let CampaignRow {
        id,
        owner_id,
        title,
        description,
        target_amount,
        collected_amount,
        min_donation,
        deadline,
        status,
        category,
        created_at,
        updated_at,
        deleted_at,
    } = row;

    let data = PersistedCampaignData {
        id: CampaignId::from_uuid(id),
        owner_id: OwnerId::new(owner_id),
        title,
        description,
        target_amount: Amount::new(target_amount).map_err(CampaignRepositoryError::persistence)?,
        collected_amount: Amount::new(collected_amount)
            .map_err(CampaignRepositoryError::persistence)?,
        min_donation: Amount::new(min_donation).map_err(CampaignRepositoryError::persistence)?,
        deadline,
        status: CampaignStatus::from_persisted(&status),
        category: CampaignCategory::from_persisted(&category),
        created_at,
        updated_at,
        deleted_at,
    };
    Ok(Campaign::from_persisted(data))
}
