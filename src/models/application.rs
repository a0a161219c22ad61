use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Statuses an admin may assign to a citizenship application.
pub const APPLICATION_STATUSES: &[&str] = &["pending", "approved", "rejected", "under_review"];

/// A completed application as frozen by the wizard on submission. Field
/// edits are no longer possible once a value of this type exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub address: String,
    pub occupation: String,
    pub education: String,
    pub skills: String,
    pub motivation: String,
    pub criminal_record: String,
    pub agree_terms: bool,
}

/// Persisted row in `citizenship_applications`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CitizenshipApplication {
    pub id: Uuid,
    pub membership_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub address: String,
    pub occupation: String,
    pub education: String,
    pub skills: String,
    pub motivation: String,
    pub criminal_record: String,
    pub agree_terms: bool,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
