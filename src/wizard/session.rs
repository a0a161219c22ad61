use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::application::ApplicationRecord;

use super::fields::{step_fields, validate_fields, ApplicationForm};
use super::membership::generate_membership_id;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    PersonalInfo,
    ProfessionalInfo,
    ApplicationDetails,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::PersonalInfo => 1,
            Step::ProfessionalInfo => 2,
            Step::ApplicationDetails => 3,
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::PersonalInfo => Some(Step::ProfessionalInfo),
            Step::ProfessionalInfo => Some(Step::ApplicationDetails),
            Step::ApplicationDetails => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::PersonalInfo => None,
            Step::ProfessionalInfo => Some(Step::PersonalInfo),
            Step::ApplicationDetails => Some(Step::ProfessionalInfo),
        }
    }
}

/// Partial update merged into the working form. Absent fields are left
/// untouched, so a step page only sends what it shows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub motivation: Option<String>,
    pub criminal_record: Option<String>,
    pub agree_terms: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmittedApplication {
    pub record: ApplicationRecord,
    pub membership_id: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("the application has already been submitted")]
    AlreadySubmitted,
    #[error("the application has not been submitted yet")]
    NotSubmitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Validation passed, moved to the next step.
    Advanced(Step),
    /// Final step validated; the record is frozen and an id assigned.
    Submitted,
    /// At least one field of the current step failed validation; the step
    /// is unchanged and `errors()` holds the messages.
    Blocked,
}

/// One applicant's trip through the three-step wizard. Owned exclusively by
/// the session store; every transition runs synchronously to completion.
#[derive(Debug, Default)]
pub struct WizardSession {
    step: Step,
    form: ApplicationForm,
    errors: BTreeMap<String, String>,
    submitted: Option<SubmittedApplication>,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn submitted(&self) -> Option<&SubmittedApplication> {
        self.submitted.as_ref()
    }

    /// Merge field edits into the working form. Rejected once the record is
    /// frozen.
    pub fn apply(&mut self, patch: ApplicationPatch) -> Result<(), WizardError> {
        if self.submitted.is_some() {
            return Err(WizardError::AlreadySubmitted);
        }
        let form = &mut self.form;
        macro_rules! merge {
            ($($field:ident),+ $(,)?) => {
                $(if let Some(value) = patch.$field {
                    form.$field = value;
                })+
            };
        }
        merge!(
            first_name,
            last_name,
            email,
            phone,
            date_of_birth,
            nationality,
            address,
            occupation,
            education,
            skills,
            motivation,
            criminal_record,
            agree_terms,
        );
        Ok(())
    }

    /// Validation-gated forward transition. On the final step a passing
    /// validation freezes the record and derives the membership id from the
    /// applicant's identity and `now`.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<StepOutcome, WizardError> {
        if self.submitted.is_some() {
            return Err(WizardError::AlreadySubmitted);
        }

        let names = step_fields(self.step);
        let step_errors = validate_fields(&self.form, &names);

        // Replace only this step's entries so errors surfaced on other
        // fields are left untouched.
        for name in &names {
            self.errors.remove(*name);
        }
        if !step_errors.is_empty() {
            self.errors.extend(step_errors);
            return Ok(StepOutcome::Blocked);
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(StepOutcome::Advanced(next))
            }
            None => {
                let membership_id = generate_membership_id(
                    &self.form.first_name,
                    &self.form.last_name,
                    &self.form.email,
                    now.timestamp_millis(),
                );
                let form = self.form.clone();
                self.submitted = Some(SubmittedApplication {
                    record: ApplicationRecord {
                        first_name: form.first_name,
                        last_name: form.last_name,
                        email: form.email,
                        phone: form.phone,
                        date_of_birth: form.date_of_birth,
                        nationality: form.nationality,
                        address: form.address,
                        occupation: form.occupation,
                        education: form.education,
                        skills: form.skills,
                        motivation: form.motivation,
                        criminal_record: form.criminal_record,
                        agree_terms: form.agree_terms,
                    },
                    membership_id,
                    submitted_at: now,
                });
                Ok(StepOutcome::Submitted)
            }
        }
    }

    /// Unconditional backward transition; accumulated values are preserved
    /// and the target step is not re-validated. At the first step this is a
    /// no-op.
    pub fn back(&mut self) -> Result<Step, WizardError> {
        if self.submitted.is_some() {
            return Err(WizardError::AlreadySubmitted);
        }
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        Ok(self.step)
    }

    /// Full reset: clears all fields, errors and the identifier, returning
    /// to the first step ("submit another application").
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
