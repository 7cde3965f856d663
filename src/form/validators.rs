// src/form/validators.rs

use std::sync::OnceLock;

use regex::Regex;

use crate::common::{ValidationResult, Validator};
use crate::files::{FileSelection, UploadMode};

use super::models::{ExperienceLevel, Field, FormFields};

// ============================================================================
// Field Rules
// ============================================================================

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\d\-+()]{10,20}$").expect("valid phone regex"))
}

/// Rule for a single field. Returns `None` when the value passes; `summary`
/// and the synthetic `resume` key always pass here (the resume check is
/// file-presence, handled by the whole-form validator).
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    let trimmed = value.trim();

    match field {
        Field::FirstName | Field::LastName => {
            let label = if field == Field::FirstName {
                "First name"
            } else {
                "Last name"
            };
            if trimmed.is_empty() {
                Some(format!("{} is required", label))
            } else if trimmed.chars().count() < 2 {
                Some(format!("{} must be at least 2 characters", label))
            } else if trimmed.chars().count() > 50 {
                Some(format!("{} must be at most 50 characters", label))
            } else {
                None
            }
        }
        Field::Email => {
            if trimmed.is_empty() {
                Some("Email is required".to_string())
            } else if !email_regex().is_match(trimmed) {
                Some("Please enter a valid email address".to_string())
            } else {
                None
            }
        }
        Field::Phone => {
            let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            if stripped.is_empty() {
                Some("Phone number is required".to_string())
            } else if !phone_regex().is_match(&stripped) {
                Some("Please enter a valid phone number".to_string())
            } else {
                None
            }
        }
        Field::Location => {
            if trimmed.is_empty() {
                Some("Location is required".to_string())
            } else if trimmed.chars().count() < 3 {
                Some("Location must be at least 3 characters".to_string())
            } else {
                None
            }
        }
        Field::JobTitle => {
            if trimmed.is_empty() {
                Some("Job title is required".to_string())
            } else if trimmed.chars().count() < 2 {
                Some("Job title must be at least 2 characters".to_string())
            } else {
                None
            }
        }
        Field::Experience => {
            if trimmed.is_empty() || ExperienceLevel::from_code(trimmed).is_none() {
                Some("Please select your experience level".to_string())
            } else {
                None
            }
        }
        Field::Skills => {
            if trimmed.is_empty() {
                Some("Skills are required".to_string())
            } else if trimmed.chars().count() < 5 {
                Some("Skills must be at least 5 characters".to_string())
            } else {
                None
            }
        }
        Field::Summary | Field::Resume => None,
    }
}

// ============================================================================
// Whole-Form Validator
// ============================================================================

/// What whole-form validation looks at: field values plus the file selection.
pub struct SubmissionCandidate<'a> {
    pub fields: &'a FormFields,
    pub files: &'a FileSelection,
}

pub struct ApplicationFormValidator;

impl Validator<SubmissionCandidate<'_>> for ApplicationFormValidator {
    fn validate(&self, data: &SubmissionCandidate<'_>) -> ValidationResult {
        let mut result = ValidationResult::new();

        for field in Field::REQUIRED {
            if let Some(message) = validate_field(field, data.fields.get(field)) {
                result.add_error(field, &message);
            }
        }

        match data.files.mode() {
            UploadMode::Single => {
                if data.files.files().len() != 1 {
                    result.add_error(Field::Resume, "Please upload your resume");
                }
            }
            UploadMode::Bulk => {
                if !data.files.has_files() {
                    result.add_error(Field::Resume, "Please upload at least one resume");
                }
            }
        }

        result
    }
}
