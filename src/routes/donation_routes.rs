use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::donation_dto::{TrackDonationRequest, TrackDonationResponse},
    error::Result,
    services::donation_service::DONATION_ADDRESS,
    services::feed_service::DONATIONS_COLLECTION,
    AppState,
};

/// Record the button press, then hand back the static payment address.
/// Whether a payment ever arrives is out of scope.
#[utoipa::path(
    post,
    path = "/api/donations",
    responses(
        (status = 201, description = "Donation press recorded; payment address returned"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn track_donation(
    State(state): State<AppState>,
    Json(payload): Json<TrackDonationRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let donation = state
        .donation_service
        .track(&payload.category, payload.email.as_deref())
        .await?;
    state.feed.publish(DONATIONS_COLLECTION, "insert");
    tracing::info!(category = %donation.category, "donation tracked");

    Ok((
        StatusCode::CREATED,
        Json(TrackDonationResponse {
            donation_id: donation.id,
            payment_address: DONATION_ADDRESS.to_string(),
        }),
    ))
}
