// src/files/admission.rs
//
// Per-file gating for resume uploads: MIME whitelist plus a hard size cap.
// Rejection is never a hard error; a rejected file is simply skipped and
// counted for the aggregate notice.

use tracing::{debug, warn};

use super::models::SelectedFile;

pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024; // 5 MiB per file

pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// What a batch screening produced: files actually added to the selection and
/// the count of rejected candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionOutcome {
    pub added: usize,
    pub rejected: usize,
}

/// Effective MIME type of a candidate file. Browsers sometimes hand over an
/// empty or generic content type, in which case the payload bytes are sniffed.
pub fn resolve_mime_type(file: &SelectedFile) -> String {
    if file.mime_type.is_empty() || file.mime_type == "application/octet-stream" {
        infer::get(&file.data)
            .map(|t| t.mime_type().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string())
    } else {
        file.mime_type.clone()
    }
}

pub fn is_admissible(file: &SelectedFile) -> bool {
    if file.size > MAX_FILE_SIZE {
        return false;
    }
    let mime = resolve_mime_type(file);
    ALLOWED_MIME_TYPES.contains(&mime.as_str())
}

/// Partition a batch into admitted files and a rejected count, preserving
/// selection order.
pub fn screen(batch: Vec<SelectedFile>) -> (Vec<SelectedFile>, usize) {
    let mut admitted = Vec::with_capacity(batch.len());
    let mut rejected = 0usize;

    for file in batch {
        if is_admissible(&file) {
            debug!(name = %file.name, size = file.size, "File admitted");
            admitted.push(file);
        } else {
            warn!(
                name = %file.name,
                size = file.size,
                mime_type = %file.mime_type,
                "File rejected: type not allowed or over size limit"
            );
            rejected += 1;
        }
    }

    (admitted, rejected)
}
