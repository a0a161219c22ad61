pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod wizard;

use crate::services::{
    application_service::ApplicationService, donation_service::DonationService,
    feed_service::ChangeFeed, government_service::GovernmentService,
};
use crate::wizard::store::SessionStore;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub application_service: ApplicationService,
    pub donation_service: DonationService,
    pub government_service: GovernmentService,
    pub sessions: SessionStore,
    pub feed: ChangeFeed,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let application_service = ApplicationService::new(pool.clone());
        let donation_service = DonationService::new(pool.clone());
        let government_service = GovernmentService::new(pool.clone());

        Self {
            pool,
            application_service,
            donation_service,
            government_service,
            sessions: SessionStore::new(),
            feed: ChangeFeed::new(),
        }
    }
}
