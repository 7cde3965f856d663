// src/form/controller.rs
//
// The application form engine. Owns field values, file selection, validation
// state and the submission lifecycle; presentation reads snapshots and feeds
// events in.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::common::{FormConfig, Notice, Notifier, TracingNotifier, Validator};
use crate::files::{
    FileSelection, InMemoryPreviewBackend, PreviewBackend, PreviewSession, SelectedFile,
    UploadMode,
};
use crate::submit::{SubmissionPayload, SubmitTransport, WebhookTransport};

use super::events::FormEvent;
use super::models::{Field, FormFields, FormSnapshot};
use super::validators::{validate_field, ApplicationFormValidator, SubmissionCandidate};

/// What a submission attempt came to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A previous attempt is still running; this one was ignored.
    InFlight,
    /// Validation failed; nothing was sent.
    Invalid,
    /// The webhook accepted the submission; the form was reset.
    Sent,
    /// Transport failed; all state was preserved for manual retry.
    Failed,
}

pub struct FormController {
    fields: FormFields,
    errors: HashMap<Field, String>,
    touched: HashSet<Field>,
    selection: FileSelection,
    preview: Option<PreviewSession>,
    submitting: bool,
    transport: Box<dyn SubmitTransport>,
    notifier: Box<dyn Notifier>,
    preview_backend: Arc<dyn PreviewBackend>,
}

impl FormController {
    pub fn new(
        transport: Box<dyn SubmitTransport>,
        notifier: Box<dyn Notifier>,
        preview_backend: Arc<dyn PreviewBackend>,
    ) -> Self {
        Self {
            fields: FormFields::new(),
            errors: HashMap::new(),
            touched: HashSet::new(),
            selection: FileSelection::new(),
            preview: None,
            submitting: false,
            transport,
            notifier,
            preview_backend,
        }
    }

    /// Production wiring: webhook transport, tracing-backed notices, in-memory
    /// preview registry.
    pub fn from_config(config: &FormConfig) -> anyhow::Result<Self> {
        Ok(Self::new(
            Box::new(WebhookTransport::new(&config.webhook_url)?),
            Box::new(TracingNotifier),
            Arc::new(InMemoryPreviewBackend::new()),
        ))
    }

    // ========================================================================
    // Event handling
    // ========================================================================

    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::ValueChanged { field, value } => self.on_value_changed(field, value),
            FormEvent::FieldBlurred { field } => self.on_field_blurred(field),
            FormEvent::FilesSelected { files } => self.on_files_selected(files),
            FormEvent::ModeChanged { mode } => self.on_mode_changed(mode),
            FormEvent::FileRemoved { index } => {
                self.selection.remove(index);
            }
            FormEvent::PreviewOpened { index } => self.on_preview_opened(index),
            FormEvent::PreviewClosed => self.preview = None,
        }
    }

    fn on_value_changed(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        // Errors are recomputed on every change but surfaced only once the
        // field has been touched.
        if self.touched.contains(&field) {
            self.revalidate(field);
        }
    }

    fn on_field_blurred(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: Field) {
        match validate_field(field, self.fields.get(field)) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(&field),
        };
    }

    fn on_files_selected(&mut self, files: Vec<SelectedFile>) {
        let batch_size = files.len();
        let outcome = self.selection.admit(files);

        info!(
            batch = batch_size,
            added = outcome.added,
            rejected = outcome.rejected,
            mode = self.selection.mode().as_str(),
            "Files screened"
        );

        if outcome.added > 0 {
            self.errors.remove(&Field::Resume);
        }
        if outcome.rejected > 0 {
            self.notifier.notify(Notice::error(
                "Invalid file(s)",
                format!("{} file(s) skipped", outcome.rejected),
            ));
        }
    }

    fn on_mode_changed(&mut self, mode: UploadMode) {
        self.selection.set_mode(mode);
        self.errors.remove(&Field::Resume);
    }

    fn on_preview_opened(&mut self, index: usize) {
        let Some(file) = self.selection.files().get(index).cloned() else {
            warn!(index, "Preview requested for unknown file index");
            return;
        };
        // Release any previous handle before acquiring the next one.
        self.preview = None;
        self.preview = Some(PreviewSession::open(self.preview_backend.clone(), &file));
    }

    // ========================================================================
    // Submission
    // ========================================================================

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }

        // Attempting submit marks every field touched.
        self.touched.extend(Field::ALL);

        let result = ApplicationFormValidator.validate(&SubmissionCandidate {
            fields: &self.fields,
            files: &self.selection,
        });

        if !result.is_valid {
            self.errors = result
                .errors
                .iter()
                .map(|e| (e.field, e.message.clone()))
                .collect();
            warn!(errors = result.errors.len(), "Submission blocked by validation");
            self.notifier.notify(Notice::error(
                "Check your application",
                "Please fix the highlighted fields and try again",
            ));
            return SubmitOutcome::Invalid;
        }

        self.errors.clear();
        self.submitting = true;

        let payload = SubmissionPayload::assemble(&self.fields, &self.selection);
        info!(
            mode = self.selection.mode().as_str(),
            files = self.selection.files().len(),
            "Submitting application"
        );

        let sent = self.transport.send(payload).await;
        self.submitting = false;

        match sent {
            Ok(()) => {
                self.fields.reset();
                self.selection.clear();
                self.errors.clear();
                self.touched.clear();
                info!("Application submitted");
                self.notifier.notify(Notice::success(
                    "Application submitted",
                    "We received your application. Thank you!",
                ));
                SubmitOutcome::Sent
            }
            Err(e) => {
                // No automatic retry; everything stays in place so the user
                // can resubmit.
                error!(error = %e, "Submission failed");
                self.notifier.notify(Notice::error(
                    "Submission failed",
                    "Something went wrong while sending your application. Please try again.",
                ));
                SubmitOutcome::Failed
            }
        }
    }

    // ========================================================================
    // State exposed to presentation
    // ========================================================================

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn mode(&self) -> UploadMode {
        self.selection.mode()
    }

    pub fn files(&self) -> &[SelectedFile] {
        self.selection.files()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn preview(&self) -> Option<&PreviewSession> {
        self.preview.as_ref()
    }

    /// Completion feedback: truthy count over the 8 required fields plus the
    /// has-files check, as a rounded percentage. Purely presentational.
    pub fn progress(&self) -> u8 {
        let mut filled = Field::REQUIRED
            .iter()
            .filter(|field| !self.fields.get(**field).is_empty())
            .count();
        if self.selection.has_files() {
            filled += 1;
        }
        ((filled as f64 / 9.0) * 100.0).round() as u8
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let errors: BTreeMap<String, String> = self
            .errors
            .iter()
            .map(|(field, message)| (field.as_str().to_string(), message.clone()))
            .collect();

        FormSnapshot {
            fields: self.fields.clone(),
            errors,
            upload_mode: self.selection.mode(),
            files: self.selection.file_metas(),
            submitting: self.submitting,
            progress: self.progress(),
        }
    }
}
