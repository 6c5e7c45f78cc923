//! Given steps for campaign lifecycle BDD scenarios.

use super::world::{CampaignWorld, run_async};
use campaign_service::campaign::{
    domain::CampaignCategory,
    services::messages::{CreateCampaignRequest, DeleteCampaignRequest},
};
use chrono::{Duration, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"owner {owner_id:u64} has created a campaign "{title}" with a target of {target:u64}"#)]
fn owner_created_campaign(
    world: &mut CampaignWorld,
    owner_id: u64,
    title: String,
    target: u64,
) -> Result<(), eyre::Report> {
    let request = CreateCampaignRequest {
        owner_id: i64::try_from(owner_id)?,
        title,
        description: String::new(),
        target_amount: i64::try_from(target)?,
        min_donation: 1,
        deadline: Utc::now() + Duration::days(30),
        category: CampaignCategory::Education.wire_value(),
    };
    let created = run_async(world.service.create(request))
        .wrap_err("create campaign for scenario")?;
    world.campaign = Some(created.created_campaign);
    Ok(())
}

#[given("the campaign has been deleted")]
fn campaign_has_been_deleted(world: &mut CampaignWorld) -> Result<(), eyre::Report> {
    let id = world.campaign()?.id.clone();
    run_async(world.service.delete(DeleteCampaignRequest { id }))
        .wrap_err("delete campaign in scenario setup")?;
    Ok(())
}
