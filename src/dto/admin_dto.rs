use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::feed_service::ChangeEvent;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollQuery {
    pub after: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PollResponse {
    pub events: Vec<ChangeEvent>,
    pub cursor: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_applications: i64,
    pub applications_by_status: HashMap<String, i64>,
    pub total_donations: i64,
    pub donations_by_category: HashMap<String, i64>,
}
