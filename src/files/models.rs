// src/files/models.rs

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::admission::{self, AdmissionOutcome};

// ============================================================================
// Upload Mode
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    Single,
    Bulk,
}

impl UploadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadMode::Single => "single",
            UploadMode::Bulk => "bulk",
        }
    }
}

impl Default for UploadMode {
    fn default() -> Self {
        UploadMode::Single
    }
}

// ============================================================================
// Selected Files
// ============================================================================

/// One file the user has picked, payload included. `Bytes` is reference
/// counted, so clones share the underlying buffer.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub data: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            name: name.into(),
            size: data.len() as u64,
            mime_type: mime_type.into(),
            data,
        }
    }
}

/// Payload-free view of a selected file, for snapshots and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl From<&SelectedFile> for FileMeta {
    fn from(file: &SelectedFile) -> Self {
        Self {
            name: file.name.clone(),
            size: file.size,
            mime_type: file.mime_type.clone(),
        }
    }
}

// ============================================================================
// File Selection State
// ============================================================================

/// Mode plus the currently selected files. Invariant: Single mode holds at
/// most one file, Bulk mode an ordered sequence (selection order, duplicate
/// names permitted).
#[derive(Debug, Default)]
pub struct FileSelection {
    mode: UploadMode,
    files: Vec<SelectedFile>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> UploadMode {
        self.mode
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn file_metas(&self) -> Vec<FileMeta> {
        self.files.iter().map(FileMeta::from).collect()
    }

    /// Switch upload mode. Destructive: all selected files are dropped,
    /// even when the mode is unchanged.
    pub fn set_mode(&mut self, mode: UploadMode) {
        debug!(mode = mode.as_str(), dropped = self.files.len(), "Upload mode changed");
        self.mode = mode;
        self.files.clear();
    }

    /// Screen a batch of candidate files and take in the admissible ones:
    /// appended in Bulk mode, replacing the singleton in Single mode (first
    /// admitted file only).
    pub fn admit(&mut self, batch: Vec<SelectedFile>) -> AdmissionOutcome {
        let (mut admitted, rejected) = admission::screen(batch);

        let added = match self.mode {
            UploadMode::Single => {
                if let Some(first) = admitted.drain(..).next() {
                    self.files = vec![first];
                    1
                } else {
                    0
                }
            }
            UploadMode::Bulk => {
                let n = admitted.len();
                self.files.append(&mut admitted);
                n
            }
        };

        AdmissionOutcome { added, rejected }
    }

    pub fn remove(&mut self, index: usize) -> Option<SelectedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
