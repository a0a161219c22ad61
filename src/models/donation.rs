use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A tracked donation-button press. Recorded before the payment address is
/// shown; whether a payment followed is never verified.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Donation {
    pub id: Uuid,
    pub category: String,
    pub email: Option<String>,
    pub clicked_at: Option<DateTime<Utc>>,
}
