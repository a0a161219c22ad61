use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    dto::wizard_dto::{ApplicationSummaryResponse, WizardStateResponse},
    error::{Error, Result},
    services::document_service,
    services::feed_service::CITIZENSHIP_COLLECTION,
    wizard::session::{ApplicationPatch, StepOutcome, SubmittedApplication, WizardError},
    AppState,
};

fn session_not_found() -> Error {
    Error::NotFound("Session not found".to_string())
}

#[utoipa::path(
    post,
    path = "/api/citizenship/sessions",
    responses(
        (status = 201, description = "Wizard session opened at step 1 with an empty application")
    )
)]
#[axum::debug_handler]
pub async fn create_session(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let id = state.sessions.create();
    let response = state
        .sessions
        .with_session(id, |session| {
            WizardStateResponse::from_session(id, session)
        })
        .ok_or_else(session_not_found)?;
    tracing::info!(session_id = %id, "citizenship wizard opened");
    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let response = state
        .sessions
        .with_session(id, |session| {
            WizardStateResponse::from_session(id, session)
        })
        .ok_or_else(session_not_found)?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/citizenship/sessions/{id}",
    params(("id" = Uuid, Path, description = "Wizard session ID")),
    responses(
        (status = 200, description = "Field edits merged into the working application"),
        (status = 400, description = "Session already submitted"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ApplicationPatch>,
) -> Result<impl IntoResponse> {
    let response = state
        .sessions
        .with_session(id, |session| {
            session.apply(patch)?;
            Ok::<_, WizardError>(WizardStateResponse::from_session(id, session))
        })
        .ok_or_else(session_not_found)??;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/citizenship/sessions/{id}/next",
    params(("id" = Uuid, Path, description = "Wizard session ID")),
    responses(
        (status = 200, description = "Advanced, blocked with field errors, or submitted"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn advance_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let now = Utc::now();
    let (outcome, submitted, response) = state
        .sessions
        .with_session(id, |session| {
            let outcome = session.advance(now)?;
            let submitted = match outcome {
                StepOutcome::Submitted => session.submitted().cloned(),
                _ => None,
            };
            Ok::<_, WizardError>((
                outcome,
                submitted,
                WizardStateResponse::from_session(id, session),
            ))
        })
        .ok_or_else(session_not_found)??;

    if let Some(application) = submitted {
        persist_submission(&state, id, application);
    } else if outcome == StepOutcome::Blocked {
        tracing::debug!(session_id = %id, "step blocked by validation errors");
    }

    Ok(Json(response))
}

/// The wizard is already in its Submitted state when this runs; the insert
/// is an independently-failable side effect and a failure never rolls the
/// session back.
fn persist_submission(state: &AppState, session_id: Uuid, application: SubmittedApplication) {
    let service = state.application_service.clone();
    let feed = state.feed.clone();
    tokio::spawn(async move {
        match service
            .insert(&application.record, &application.membership_id)
            .await
        {
            Ok(row) => {
                feed.publish(CITIZENSHIP_COLLECTION, "insert");
                tracing::info!(
                    session_id = %session_id,
                    application_id = %row.id,
                    membership_id = %row.membership_id,
                    "citizenship application persisted"
                );
            }
            Err(e) => {
                tracing::error!(
                    session_id = %session_id,
                    error = ?e,
                    "failed to persist citizenship application"
                );
            }
        }
    });
}

#[axum::debug_handler]
pub async fn back_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let response = state
        .sessions
        .with_session(id, |session| {
            session.back()?;
            Ok::<_, WizardError>(WizardStateResponse::from_session(id, session))
        })
        .ok_or_else(session_not_found)??;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let response = state
        .sessions
        .with_session(id, |session| {
            session.reset();
            WizardStateResponse::from_session(id, session)
        })
        .ok_or_else(session_not_found)?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let submitted = state
        .sessions
        .with_session(id, |session| session.submitted().cloned())
        .ok_or_else(session_not_found)?
        .ok_or_else(|| Error::BadRequest("Application has not been submitted".to_string()))?;

    Ok(Json(ApplicationSummaryResponse {
        membership_id: submitted.membership_id,
        record: submitted.record,
        status: "under_review".to_string(),
        submitted_at: submitted.submitted_at,
    }))
}

#[utoipa::path(
    get,
    path = "/api/citizenship/sessions/{id}/document",
    params(("id" = Uuid, Path, description = "Wizard session ID")),
    responses(
        (status = 200, description = "PDF summary of the submitted application"),
        (status = 400, description = "Application has not been submitted"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn download_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let submitted = state
        .sessions
        .with_session(id, |session| session.submitted().cloned())
        .ok_or_else(session_not_found)?
        .ok_or_else(|| Error::BadRequest("Application has not been submitted".to_string()))?;

    let bytes =
        document_service::render_pdf(&submitted.record, &submitted.membership_id, Utc::now())?;
    let filename = document_service::document_filename(&submitted.membership_id);

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, bytes))
}

#[axum::debug_handler]
pub async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found())
    }
}
