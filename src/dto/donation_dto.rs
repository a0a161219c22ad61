use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrackDonationRequest {
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrackDonationResponse {
    #[schema(value_type = String)]
    pub donation_id: Uuid,
    /// Static receiving address; no payment verification happens.
    pub payment_address: String,
}
