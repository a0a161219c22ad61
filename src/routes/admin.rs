use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use subtle::ConstantTimeEq;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::admin_dto::{
        AdminLoginRequest, AdminLoginResponse, DashboardStats, PollQuery, PollResponse,
        UpdateStatusRequest,
    },
    error::{Error, Result},
    middleware::auth::issue_admin_token,
    services::feed_service::{CITIZENSHIP_COLLECTION, GOVERNMENT_COLLECTION},
    AppState,
};

/// Exchange the configured credential pair for a bearer token. A fixed
/// pair checked in constant time, not an account system.
#[axum::debug_handler]
pub async fn login(Json(payload): Json<AdminLoginRequest>) -> Result<impl IntoResponse> {
    payload.validate()?;
    let config = crate::config::get_config();

    let username_ok: bool = payload
        .username
        .as_bytes()
        .ct_eq(config.admin_username.as_bytes())
        .into();
    let password_ok: bool = payload
        .password
        .as_bytes()
        .ct_eq(config.admin_password.as_bytes())
        .into();
    if !(username_ok && password_ok) {
        return Err(Error::Unauthorized("Invalid credentials".to_string()));
    }

    let (token, expires_at) = issue_admin_token(&payload.username)?;
    Ok(Json(AdminLoginResponse { token, expires_at }))
}

#[axum::debug_handler]
pub async fn list_applications(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let applications = state.application_service.list().await?;
    Ok(Json(applications))
}

#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse> {
    let application = state
        .application_service
        .update_status(id, &payload.status)
        .await?;
    state.feed.publish(CITIZENSHIP_COLLECTION, "update");
    tracing::info!(application_id = %id, status = %payload.status, "application status changed");
    Ok(Json(application))
}

#[axum::debug_handler]
pub async fn list_donations(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let donations = state.donation_service.list().await?;
    Ok(Json(donations))
}

#[axum::debug_handler]
pub async fn list_government_applications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let applications = state.government_service.list().await?;
    Ok(Json(applications))
}

#[axum::debug_handler]
pub async fn update_government_application_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse> {
    let application = state
        .government_service
        .update_status(id, &payload.status)
        .await?;
    state.feed.publish(GOVERNMENT_COLLECTION, "update");
    tracing::info!(application_id = %id, status = %payload.status, "government application status changed");
    Ok(Json(application))
}

#[axum::debug_handler]
pub async fn dashboard_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let applications_by_status = state.application_service.status_counts().await?;
    let donations_by_category = state.donation_service.category_counts().await?;
    let stats = DashboardStats {
        total_applications: applications_by_status.values().sum(),
        total_donations: donations_by_category.values().sum(),
        applications_by_status,
        donations_by_category,
    };
    Ok(Json(stats))
}

/// Change-notification poll: events after the caller's cursor. The admin
/// client reacts by re-fetching the affected collection.
#[axum::debug_handler]
pub async fn poll_notifications(
    State(state): State<AppState>,
    Query(query): Query<PollQuery>,
) -> Result<impl IntoResponse> {
    let after = query.after.unwrap_or(0);
    Ok(Json(PollResponse {
        events: state.feed.since(after),
        cursor: state.feed.cursor(),
    }))
}
