// src/form/events.rs
//
// Everything the presentation layer can do to the form, minus the async
// submit which lives on the controller as `submit()`.

use crate::files::{SelectedFile, UploadMode};

use super::models::Field;

#[derive(Debug, Clone)]
pub enum FormEvent {
    /// A keystroke or selection changed a field's value.
    ValueChanged { field: Field, value: String },
    /// The user left a field; it becomes touched and validates immediately.
    FieldBlurred { field: Field },
    /// Files picked or dropped; each is screened individually.
    FilesSelected { files: Vec<SelectedFile> },
    /// Upload mode toggled; drops all selected files.
    ModeChanged { mode: UploadMode },
    /// Remove one selected file by position.
    FileRemoved { index: usize },
    /// Open a preview for the file at the given position.
    PreviewOpened { index: usize },
    PreviewClosed,
}
