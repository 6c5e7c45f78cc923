//! Shared test helpers for `PostgreSQL` integration tests.

use std::sync::Arc;

use campaign_service::{
    campaign::{
        adapters::postgres::{CampaignPgPool, PostgresCampaignRepository},
        services::CampaignLifecycleService,
    },
    config::DatabaseConfig,
};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{CustomizeConnection, Error as R2d2Error, Pool};
use mockable::DefaultClock;
use rstest::fixture;
use uuid::Uuid;

/// Prefix of the database settings used by these tests.
pub const ENV_PREFIX: &str = "CAMPAIGN_TEST_";

/// SQL creating the campaign table.
pub const CREATE_CAMPAIGNS_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_campaigns/up.sql");

/// Service type wired to the `PostgreSQL` repository.
pub type PgService = CampaignLifecycleService<PostgresCampaignRepository, DefaultClock>;

/// Opens a test transaction on each pooled connection and migrates a fresh
/// schema inside it, so nothing outlives the test.
#[derive(Debug)]
struct IsolatedSchema {
    name: String,
}

impl CustomizeConnection<PgConnection, R2d2Error> for IsolatedSchema {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), R2d2Error> {
        conn.begin_test_transaction()
            .map_err(R2d2Error::QueryError)?;
        conn.batch_execute(&format!(
            "CREATE SCHEMA {name}; SET search_path TO {name};",
            name = self.name
        ))
        .map_err(R2d2Error::QueryError)?;
        conn.batch_execute(CREATE_CAMPAIGNS_SQL)
            .map_err(R2d2Error::QueryError)
    }
}

/// Repository, service and raw pool sharing one isolated connection.
pub struct PgTestContext {
    pub pool: CampaignPgPool,
    pub repository: Arc<PostgresCampaignRepository>,
    pub service: PgService,
}

/// Builds a context from the `CAMPAIGN_TEST_` prefixed database settings.
///
/// The pool is pinned to one connection so every statement in a test sees
/// the same uncommitted schema.
///
/// # Errors
///
/// Returns an error when `CAMPAIGN_TEST_DATABASE_URL` is unset or the pool
/// cannot be built.
pub fn try_context() -> Result<PgTestContext, eyre::Report> {
    let config = DatabaseConfig {
        pool_size: 1,
        ..DatabaseConfig::from_env_prefixed(ENV_PREFIX)?
    };
    let schema = IsolatedSchema {
        name: format!("test_{}", Uuid::new_v4().simple()),
    };
    let pool = config.build_pool_with(Pool::builder().connection_customizer(Box::new(schema)))?;
    let repository = Arc::new(PostgresCampaignRepository::new(pool.clone()));
    let service = CampaignLifecycleService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    Ok(PgTestContext {
        pool,
        repository,
        service,
    })
}

/// Fixture yielding an isolated context. Fails the test when no database is
/// configured.
#[fixture]
pub fn context() -> PgTestContext {
    try_context().expect("CAMPAIGN_TEST_DATABASE_URL must name a reachable PostgreSQL server")
}
