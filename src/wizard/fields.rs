use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::session::Step;

pub const EDUCATION_LEVELS: &[&str] = &[
    "high-school",
    "associate",
    "bachelor",
    "master",
    "doctorate",
    "professional",
    "trade",
    "other",
];

pub const CRIMINAL_RECORD_OPTIONS: &[&str] = &["no-record", "minor-offenses", "will-disclose"];

/// Working copy of the application while the wizard is open. All fields
/// start empty and are merged in patch by patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationForm {
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

impl ApplicationForm {
    fn text_value(&self, name: &str) -> Option<&str> {
        let value = match name {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "date_of_birth" => &self.date_of_birth,
            "nationality" => &self.nationality,
            "address" => &self.address,
            "occupation" => &self.occupation,
            "education" => &self.education,
            "skills" => &self.skills,
            "motivation" => &self.motivation,
            "criminal_record" => &self.criminal_record,
            _ => return None,
        };
        Some(value.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    MinLen(usize),
    Email,
    OneOf(&'static [&'static str]),
    MustAccept,
}

pub struct FieldRule {
    pub name: &'static str,
    pub step: Step,
    pub constraint: Constraint,
    pub message: &'static str,
}

/// One row per application field: constraint, user-facing error message and
/// the wizard step the field belongs to.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        name: "first_name",
        step: Step::PersonalInfo,
        constraint: Constraint::MinLen(2),
        message: "First name must be at least 2 characters",
    },
    FieldRule {
        name: "last_name",
        step: Step::PersonalInfo,
        constraint: Constraint::MinLen(2),
        message: "Last name must be at least 2 characters",
    },
    FieldRule {
        name: "email",
        step: Step::PersonalInfo,
        constraint: Constraint::Email,
        message: "Please enter a valid email address",
    },
    FieldRule {
        name: "phone",
        step: Step::PersonalInfo,
        constraint: Constraint::MinLen(10),
        message: "Please enter a valid phone number",
    },
    FieldRule {
        name: "date_of_birth",
        step: Step::PersonalInfo,
        constraint: Constraint::MinLen(1),
        message: "Date of birth is required",
    },
    FieldRule {
        name: "nationality",
        step: Step::PersonalInfo,
        constraint: Constraint::MinLen(2),
        message: "Current nationality is required",
    },
    FieldRule {
        name: "address",
        step: Step::PersonalInfo,
        constraint: Constraint::MinLen(10),
        message: "Full address is required",
    },
    FieldRule {
        name: "occupation",
        step: Step::ProfessionalInfo,
        constraint: Constraint::MinLen(2),
        message: "Occupation is required",
    },
    FieldRule {
        name: "education",
        step: Step::ProfessionalInfo,
        constraint: Constraint::OneOf(EDUCATION_LEVELS),
        message: "Education level is required",
    },
    FieldRule {
        name: "skills",
        step: Step::ProfessionalInfo,
        constraint: Constraint::MinLen(20),
        message: "Please describe your skills and experience",
    },
    FieldRule {
        name: "motivation",
        step: Step::ApplicationDetails,
        constraint: Constraint::MinLen(50),
        message: "Please provide at least 50 characters explaining your motivation",
    },
    FieldRule {
        name: "criminal_record",
        step: Step::ApplicationDetails,
        constraint: Constraint::OneOf(CRIMINAL_RECORD_OPTIONS),
        message: "Please select an option",
    },
    FieldRule {
        name: "agree_terms",
        step: Step::ApplicationDetails,
        constraint: Constraint::MustAccept,
        message: "You must agree to the terms to proceed",
    },
];

/// Field names belonging to one wizard step, in table order.
pub fn step_fields(step: Step) -> Vec<&'static str> {
    FIELD_RULES
        .iter()
        .filter(|rule| rule.step == step)
        .map(|rule| rule.name)
        .collect()
}

/// Validate only the named subset of fields. Returns an error message per
/// failing field; fields outside the subset are never inspected.
pub fn validate_fields(form: &ApplicationForm, names: &[&str]) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    for rule in FIELD_RULES.iter().filter(|r| names.contains(&r.name)) {
        let valid = match rule.constraint {
            Constraint::MinLen(min) => form
                .text_value(rule.name)
                .map(|v| v.chars().count() >= min)
                .unwrap_or(false),
            Constraint::Email => form
                .text_value(rule.name)
                .map(|v| v.validate_email())
                .unwrap_or(false),
            Constraint::OneOf(options) => form
                .text_value(rule.name)
                .map(|v| options.contains(&v))
                .unwrap_or(false),
            Constraint::MustAccept => form.agree_terms,
        };
        if !valid {
            errors.insert(rule.name.to_string(), rule.message.to_string());
        }
    }
    errors
}
