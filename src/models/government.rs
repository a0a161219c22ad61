use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const GOVERNMENT_APPLICATION_STATUSES: &[&str] =
    &["pending", "under_review", "approved", "rejected"];

/// Persisted row in `government_applications`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GovernmentApplication {
    pub id: Uuid,
    pub position_id: String,
    pub position_title: String,
    pub department: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub qualifications: String,
    pub experience: String,
    pub vision: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A seat in the government structure, advertised on the vacancies page.
#[derive(Debug, Clone, Serialize)]
pub struct GovernmentPosition {
    pub id: &'static str,
    pub title: &'static str,
    pub department: &'static str,
    pub status: &'static str,
    pub requirements: &'static str,
}
