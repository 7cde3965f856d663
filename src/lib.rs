//! Headless engine for a single-page job-application form.
//!
//! The [`form::FormController`] owns field values, file-selection state,
//! validation state and the submission lifecycle. Presentation is external:
//! a host feeds [`form::FormEvent`]s in, reads [`form::FormSnapshot`]s out,
//! and supplies the collaborator seams ([`common::Notifier`],
//! [`submit::SubmitTransport`], [`files::PreviewBackend`]).

pub mod common;
pub mod files;
pub mod form;
pub mod submit;

pub use common::{FormConfig, Notice, Notifier, Severity};
pub use files::{FileSelection, SelectedFile, UploadMode};
pub use form::{ExperienceLevel, Field, FormController, FormEvent, FormSnapshot, SubmitOutcome};
pub use submit::{SubmitError, SubmitTransport, WebhookTransport};
