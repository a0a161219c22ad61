use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::government_dto::GovernmentApplicationPayload,
    error::Result,
    services::feed_service::GOVERNMENT_COLLECTION,
    AppState,
};

#[axum::debug_handler]
pub async fn list_positions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.government_service.positions()))
}

#[utoipa::path(
    post,
    path = "/api/government/applications",
    responses(
        (status = 201, description = "Government application submitted with status pending"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<GovernmentApplicationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let application = state.government_service.create(payload).await?;
    state.feed.publish(GOVERNMENT_COLLECTION, "insert");
    tracing::info!(
        application_id = %application.id,
        position = %application.position_title,
        "government application submitted"
    );
    Ok((StatusCode::CREATED, Json(application)))
}
