// src/submit/mod.rs

pub mod payload;
pub mod transport;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use payload::{FilePart, SubmissionPayload};
pub use transport::{SubmitError, SubmitTransport, WebhookTransport};
