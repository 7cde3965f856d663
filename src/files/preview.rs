// src/files/preview.rs
//
// In-form file preview. A preview session owns a display handle acquired from
// the host's preview backend (in a browser host this would be an object URL).
// The handle is RAII: release happens on Drop, so close, replacement and
// controller teardown all release exactly once.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::models::SelectedFile;

// ============================================================================
// Backend
// ============================================================================

/// Host-side surface that turns a selected file into something displayable.
pub trait PreviewBackend: Send + Sync {
    /// Acquire a display handle for the file. Must be paired with exactly one
    /// `release` of the returned token.
    fn acquire(&self, file: &SelectedFile) -> Uuid;

    fn release(&self, token: Uuid);
}

/// Default backend: keeps the previewed payload in a registry keyed by token
/// so the host can fetch it for display.
#[derive(Default)]
pub struct InMemoryPreviewBackend {
    registry: Mutex<HashMap<Uuid, Bytes>>,
}

impl InMemoryPreviewBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payload(&self, token: Uuid) -> Option<Bytes> {
        self.registry.lock().ok()?.get(&token).cloned()
    }

    pub fn live_handles(&self) -> usize {
        self.registry.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl PreviewBackend for InMemoryPreviewBackend {
    fn acquire(&self, file: &SelectedFile) -> Uuid {
        let token = Uuid::new_v4();
        if let Ok(mut registry) = self.registry.lock() {
            registry.insert(token, file.data.clone());
        }
        debug!(name = %file.name, token = %token, "Preview handle acquired");
        token
    }

    fn release(&self, token: Uuid) {
        if let Ok(mut registry) = self.registry.lock() {
            registry.remove(&token);
        }
        debug!(token = %token, "Preview handle released");
    }
}

// ============================================================================
// Display Handle
// ============================================================================

/// Owned display handle. Dropping it releases the token with the backend that
/// issued it; there is no other release path, so double release is impossible.
pub struct DisplayHandle {
    token: Uuid,
    backend: Arc<dyn PreviewBackend>,
}

impl DisplayHandle {
    pub fn acquire(backend: Arc<dyn PreviewBackend>, file: &SelectedFile) -> Self {
        let token = backend.acquire(file);
        Self { token, backend }
    }

    pub fn token(&self) -> Uuid {
        self.token
    }
}

impl Drop for DisplayHandle {
    fn drop(&mut self) {
        self.backend.release(self.token);
    }
}

impl fmt::Debug for DisplayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayHandle")
            .field("token", &self.token)
            .finish()
    }
}

// ============================================================================
// Preview Session
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    /// PDF files render inline.
    Pdf,
    /// Admitted non-PDF types (Word documents) show a placeholder.
    Unavailable,
}

/// At most one session is live at a time; the controller enforces that by
/// dropping any previous session before opening a new one.
#[derive(Debug)]
pub struct PreviewSession {
    file_name: String,
    kind: PreviewKind,
    handle: DisplayHandle,
}

impl PreviewSession {
    pub fn open(backend: Arc<dyn PreviewBackend>, file: &SelectedFile) -> Self {
        let kind = if file.mime_type == "application/pdf" {
            PreviewKind::Pdf
        } else {
            PreviewKind::Unavailable
        };
        let handle = DisplayHandle::acquire(backend, file);
        debug!(name = %file.name, kind = ?kind, "Preview opened");
        Self {
            file_name: file.name.clone(),
            kind,
            handle,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn kind(&self) -> PreviewKind {
        self.kind
    }

    pub fn token(&self) -> Uuid {
        self.handle.token()
    }
}
