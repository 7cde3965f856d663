// src/submit/payload.rs
//
// Multipart body assembly. Text fields go out trimmed; files go out as one
// `resume` part in single mode, or indexed `resume_{i}` parts plus a
// `resumeCount` field in bulk mode.

use bytes::Bytes;

use crate::files::{FileSelection, SelectedFile, UploadMode};
use crate::form::models::{Field, FormFields};

#[derive(Debug, Clone)]
pub struct FilePart {
    /// Multipart part name (`resume` or `resume_{i}`).
    pub part_name: String,
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    /// Text parts in order: the nine form fields, the uploadMode tag, and
    /// resumeCount in bulk mode.
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl SubmissionPayload {
    pub fn assemble(fields: &FormFields, selection: &FileSelection) -> Self {
        let text_fields = [
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::Phone,
            Field::Location,
            Field::JobTitle,
            Field::Experience,
            Field::Skills,
            Field::Summary,
        ];

        let mut parts: Vec<(String, String)> = text_fields
            .iter()
            .map(|field| {
                (
                    field.as_str().to_string(),
                    fields.get(*field).trim().to_string(),
                )
            })
            .collect();

        parts.push(("uploadMode".to_string(), selection.mode().as_str().to_string()));

        let files = match selection.mode() {
            UploadMode::Single => selection
                .files()
                .iter()
                .take(1)
                .map(|file| file_part("resume".to_string(), file))
                .collect(),
            UploadMode::Bulk => {
                parts.push(("resumeCount".to_string(), selection.files().len().to_string()));
                selection
                    .files()
                    .iter()
                    .enumerate()
                    .map(|(i, file)| file_part(format!("resume_{}", i), file))
                    .collect()
            }
        };

        Self {
            fields: parts,
            files,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn file_part(part_name: String, file: &SelectedFile) -> FilePart {
    FilePart {
        part_name,
        file_name: file.name.clone(),
        mime_type: file.mime_type.clone(),
        data: file.data.clone(),
    }
}
