// src/files/mod.rs

pub mod admission;
pub mod models;
pub mod preview;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use admission::{AdmissionOutcome, ALLOWED_MIME_TYPES, MAX_FILE_SIZE};
pub use models::{FileMeta, FileSelection, SelectedFile, UploadMode};
pub use preview::{DisplayHandle, InMemoryPreviewBackend, PreviewBackend, PreviewKind, PreviewSession};
