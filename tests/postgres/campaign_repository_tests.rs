//! `PostgreSQL` integration tests for campaign persistence.

use campaign_service::campaign::{
    domain::{
        Amount, Campaign, CampaignCategory, CampaignDraft, CampaignId, CampaignPatch,
        CampaignStatus, MAX_TITLE_LENGTH, OwnerId,
    },
    ports::{CampaignRepository, CampaignRepositoryError},
    services::{
        ErrorKind,
        messages::{CreateCampaignRequest, GetCampaignByIdRequest, UpdateCampaignRequest},
    },
};
use chrono::{Duration, Utc};
use diesel::prelude::*;
use diesel::sql_types;
use mockable::DefaultClock;
use rstest::rstest;

use crate::postgres::helpers::{PgTestContext, context};

const OWNER: OwnerId = OwnerId::new(42);

fn amount(value: i64) -> Amount {
    Amount::new(value).expect("non-negative test amount")
}

fn draft(owner_id: OwnerId, title: &str) -> CampaignDraft {
    CampaignDraft {
        owner_id,
        title: title.to_owned(),
        description: "Clean water for the village".to_owned(),
        target_amount: amount(1000),
        min_donation: amount(10),
        deadline: Utc::now() + Duration::days(30),
        category: CampaignCategory::Education,
    }
}

async fn seed(ctx: &PgTestContext, owner_id: OwnerId, title: &str) -> Campaign {
    let campaign = Campaign::new(draft(owner_id, title), &DefaultClock).expect("valid draft");
    ctx.repository
        .create(&campaign)
        .await
        .expect("insert should succeed")
}

#[rstest]
#[ignore = "needs a PostgreSQL server named by CAMPAIGN_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn create_round_trips_through_storage(#[from(context)] ctx: PgTestContext) {
    let created = seed(&ctx, OWNER, "Build a well").await;

    let fetched = ctx
        .repository
        .get_by_id(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched.id(), created.id());
    assert_eq!(fetched.title(), "Build a well");
    assert_eq!(fetched.status(), CampaignStatus::Active);
    assert_eq!(fetched.category(), CampaignCategory::Education);
    assert_eq!(fetched.collected_amount(), Amount::ZERO);
    assert!(fetched.deleted_at().is_none());
}

#[rstest]
#[ignore = "needs a PostgreSQL server named by CAMPAIGN_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_identifier_is_rejected(#[from(context)] ctx: PgTestContext) {
    let created = seed(&ctx, OWNER, "Build a well").await;

    let result = ctx.repository.create(&created).await;

    assert!(matches!(
        result,
        Err(CampaignRepositoryError::DuplicateCampaign(id)) if id == created.id()
    ));
}

#[rstest]
#[ignore = "needs a PostgreSQL server named by CAMPAIGN_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_owner_filters_and_orders(#[from(context)] ctx: PgTestContext) {
    let first = seed(&ctx, OWNER, "First").await;
    seed(&ctx, OwnerId::new(7), "Elsewhere").await;
    let second = seed(&ctx, OWNER, "Second").await;

    let listed = ctx
        .repository
        .find_by_owner(OWNER)
        .await
        .expect("listing should succeed");
    let ids: Vec<CampaignId> = listed.iter().map(Campaign::id).collect();

    assert_eq!(ids, vec![first.id(), second.id()]);
    let none = ctx
        .repository
        .find_by_owner(OwnerId::new(999))
        .await
        .expect("listing should succeed");
    assert!(none.is_empty());
}

#[rstest]
#[ignore = "needs a PostgreSQL server named by CAMPAIGN_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn update_applies_only_supplied_fields(#[from(context)] ctx: PgTestContext) {
    let created = seed(&ctx, OWNER, "Build a well").await;
    let patch = CampaignPatch::new()
        .with_category(CampaignCategory::Healthcare)
        .with_status(CampaignStatus::Paused);
    let stamp = Utc::now();

    let updated = ctx
        .repository
        .update(created.id(), OWNER, &patch, stamp)
        .await
        .expect("update should succeed");

    assert_eq!(updated.category(), CampaignCategory::Healthcare);
    assert_eq!(updated.status(), CampaignStatus::Paused);
    assert_eq!(updated.title(), created.title());
    assert_eq!(updated.target_amount(), created.target_amount());
    assert_eq!(updated.created_at(), created.created_at());
    assert!(updated.updated_at() >= created.updated_at());
}

#[rstest]
#[ignore = "needs a PostgreSQL server named by CAMPAIGN_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_updates_are_classified(#[from(context)] ctx: PgTestContext) {
    let created = seed(&ctx, OWNER, "Build a well").await;
    let patch = CampaignPatch::new().with_title("Renamed");

    let missing = ctx
        .repository
        .update(CampaignId::new(), OWNER, &patch, Utc::now())
        .await;
    assert!(matches!(missing, Err(CampaignRepositoryError::NotFound(_))));

    let foreign = ctx
        .repository
        .update(created.id(), OwnerId::new(7), &patch, Utc::now())
        .await;
    assert!(matches!(
        foreign,
        Err(CampaignRepositoryError::OwnerMismatch { .. })
    ));

    ctx.repository
        .delete(created.id(), Utc::now())
        .await
        .expect("delete should succeed");
    let terminal = ctx
        .repository
        .update(created.id(), OwnerId::new(7), &patch, Utc::now())
        .await;
    assert!(matches!(
        terminal,
        Err(CampaignRepositoryError::TerminalStatus {
            status: CampaignStatus::Cancelled,
            ..
        })
    ));

    let stored = ctx
        .repository
        .get_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored.title(), "Build a well");
}

#[rstest]
#[ignore = "needs a PostgreSQL server named by CAMPAIGN_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn delete_cancels_and_marks_campaign(#[from(context)] ctx: PgTestContext) {
    let created = seed(&ctx, OWNER, "Build a well").await;
    let deleted_at = Utc::now();

    ctx.repository
        .delete(created.id(), deleted_at)
        .await
        .expect("delete should succeed");

    let fetched = ctx
        .repository
        .get_by_id(created.id())
        .await
        .expect("soft-deleted campaign stays readable");
    assert_eq!(fetched.status(), CampaignStatus::Cancelled);
    assert!(fetched.deleted_at().is_some());

    let missing = ctx.repository.delete(CampaignId::new(), Utc::now()).await;
    assert!(matches!(missing, Err(CampaignRepositoryError::NotFound(_))));
}

#[rstest]
#[ignore = "needs a PostgreSQL server named by CAMPAIGN_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn legacy_empty_status_reads_as_unspecified(#[from(context)] ctx: PgTestContext) {
    let id = CampaignId::new();
    {
        let mut connection = ctx.pool.get().expect("pooled connection");
        diesel::sql_query(
            "INSERT INTO campaigns (id, owner_id, title, target_amount, deadline, status, category) \
             VALUES ($1, $2, 'Legacy', 100, NOW() + INTERVAL '1 day', '', 'no-such-category')",
        )
        .bind::<sql_types::Uuid, _>(id.into_inner())
        .bind::<sql_types::BigInt, _>(OWNER.value())
        .execute(&mut connection)
        .expect("raw insert should succeed");
    }

    let fetched = ctx
        .repository
        .get_by_id(id)
        .await
        .expect("legacy row should decode");
    assert_eq!(fetched.status(), CampaignStatus::Unspecified);
    assert_eq!(fetched.category(), CampaignCategory::Unspecified);

    let updated = ctx
        .repository
        .update(
            id,
            OWNER,
            &CampaignPatch::new().with_status(CampaignStatus::Active),
            Utc::now(),
        )
        .await
        .expect("unspecified status is not terminal");
    assert_eq!(updated.status(), CampaignStatus::Active);
}

#[rstest]
#[ignore = "needs a PostgreSQL server named by CAMPAIGN_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn service_maps_storage_outcomes_to_error_kinds(#[from(context)] ctx: PgTestContext) {
    let created = seed(&ctx, OWNER, "Build a well").await;

    let foreign = ctx
        .service
        .update(UpdateCampaignRequest {
            id: created.id().to_string(),
            owner_id: 7,
            title: "Hijacked".to_owned(),
            ..UpdateCampaignRequest::default()
        })
        .await
        .expect_err("foreign owner should be rejected");
    assert_eq!(foreign.kind(), ErrorKind::PermissionDenied);

    let missing = ctx
        .service
        .get_by_id(GetCampaignByIdRequest {
            id: CampaignId::new().to_string(),
        })
        .await
        .expect_err("unknown campaign should fail");
    assert_eq!(missing.kind(), ErrorKind::NotFound);
}

#[rstest]
#[ignore = "needs a PostgreSQL server named by CAMPAIGN_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn title_limit_matches_column_width(#[from(context)] ctx: PgTestContext) {
    let request = |title: String| CreateCampaignRequest {
        owner_id: OWNER.value(),
        title,
        description: String::new(),
        target_amount: 1000,
        min_donation: 10,
        deadline: Utc::now() + Duration::days(30),
        category: CampaignCategory::Education.wire_value(),
    };

    let overlong = ctx
        .service
        .create(request("x".repeat(MAX_TITLE_LENGTH + 45)))
        .await
        .expect_err("overlong title should be rejected before storage");
    assert_eq!(overlong.kind(), ErrorKind::InvalidArgument);

    let widest = "é".repeat(MAX_TITLE_LENGTH);
    let created = ctx
        .service
        .create(request(widest.clone()))
        .await
        .expect("title at the limit fits the column")
        .created_campaign;
    assert_eq!(created.title, widest);

    let renamed = ctx
        .service
        .update(UpdateCampaignRequest {
            id: created.id,
            owner_id: OWNER.value(),
            title: "y".repeat(MAX_TITLE_LENGTH + 1),
            ..UpdateCampaignRequest::default()
        })
        .await
        .expect_err("overlong replacement title should be rejected");
    assert_eq!(renamed.kind(), ErrorKind::InvalidArgument);
}
