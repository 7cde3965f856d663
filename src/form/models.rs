// src/form/models.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::files::{FileMeta, UploadMode};

// ============================================================================
// Fields
// ============================================================================

/// Keys of the application form. `Resume` is synthetic: it never carries a
/// text value but participates in validation (file-presence check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Location,
    JobTitle,
    Experience,
    Skills,
    Summary,
    Resume,
}

impl Field {
    /// Text fields that must pass validation before submission.
    pub const REQUIRED: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Location,
        Field::JobTitle,
        Field::Experience,
        Field::Skills,
    ];

    /// Every field, including the synthetic resume key.
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Location,
        Field::JobTitle,
        Field::Experience,
        Field::Skills,
        Field::Summary,
        Field::Resume,
    ];

    /// Wire name, as used in the multipart payload and error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Location => "location",
            Field::JobTitle => "jobTitle",
            Field::Experience => "experience",
            Field::Skills => "skills",
            Field::Summary => "summary",
            Field::Resume => "resume",
        }
    }
}

// ============================================================================
// Experience Levels
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 5] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
        ExperienceLevel::Executive,
    ];

    /// Code stored in the form field and passed through to the webhook.
    pub fn code(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
            ExperienceLevel::Executive => "executive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry level (0-2 years)",
            ExperienceLevel::Mid => "Mid level (2-5 years)",
            ExperienceLevel::Senior => "Senior (5-10 years)",
            ExperienceLevel::Lead => "Lead (10+ years)",
            ExperienceLevel::Executive => "Executive",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == code)
    }
}

// ============================================================================
// Form Field Values
// ============================================================================

/// Current value of every text field. All start empty and reset to empty on
/// successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub job_title: String,
    pub experience: String,
    pub skills: String,
    pub summary: String,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Location => &self.location,
            Field::JobTitle => &self.job_title,
            Field::Experience => &self.experience,
            Field::Skills => &self.skills,
            Field::Summary => &self.summary,
            Field::Resume => "",
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Location => self.location = value,
            Field::JobTitle => self.job_title = value,
            Field::Experience => self.experience = value,
            Field::Skills => self.skills = value,
            Field::Summary => self.summary = value,
            Field::Resume => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Presentation-facing view of the whole engine state, serializable so hosts
/// can render or log it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub errors: BTreeMap<String, String>,
    pub upload_mode: UploadMode,
    pub files: Vec<FileMeta>,
    pub submitting: bool,
    pub progress: u8,
}

impl FormSnapshot {
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
