use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::application::ApplicationRecord;
use crate::wizard::fields::ApplicationForm;
use crate::wizard::session::{Step, WizardSession};

pub const STEPS_TOTAL: u8 = 3;

/// Snapshot of an open (or submitted) wizard session.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WizardStateResponse {
    #[schema(value_type = String)]
    pub session_id: Uuid,
    pub step: u8,
    pub steps_total: u8,
    #[schema(value_type = Object)]
    pub values: ApplicationForm,
    pub errors: BTreeMap<String, String>,
    pub submitted: bool,
    pub membership_id: Option<String>,
}

impl WizardStateResponse {
    pub fn from_session(session_id: Uuid, session: &WizardSession) -> Self {
        let submitted = session.submitted();
        Self {
            session_id,
            step: submitted
                .map(|_| Step::ApplicationDetails.number())
                .unwrap_or_else(|| session.step().number()),
            steps_total: STEPS_TOTAL,
            values: session.form().clone(),
            errors: session.errors().clone(),
            submitted: submitted.is_some(),
            membership_id: submitted.map(|s| s.membership_id.clone()),
        }
    }
}

/// Read-only summary of a submitted application.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApplicationSummaryResponse {
    pub membership_id: String,
    #[schema(value_type = Object)]
    pub record: ApplicationRecord,
    pub status: String,
    #[schema(value_type = String)]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
