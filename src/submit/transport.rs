// src/submit/transport.rs

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error, info};

use super::payload::SubmissionPayload;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Webhook rejected submission: HTTP {0}")]
    RejectedStatus(u16),

    #[error("Invalid multipart part '{0}': {1}")]
    InvalidPart(String, String),
}

/// One outbound request per submission attempt. No retries, no chunking.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn send(&self, payload: SubmissionPayload) -> Result<(), SubmitError>;
}

pub struct WebhookTransport {
    client: Client,
    endpoint: String,
}

impl WebhookTransport {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder().no_proxy().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(payload: SubmissionPayload) -> Result<Form, SubmitError> {
        let mut form = Form::new();

        for (name, value) in payload.fields {
            form = form.text(name, value);
        }

        for file in payload.files {
            let part = Part::bytes(file.data.to_vec())
                .file_name(file.file_name)
                .mime_str(&file.mime_type)
                .map_err(|e| SubmitError::InvalidPart(file.part_name.clone(), e.to_string()))?;
            form = form.part(file.part_name, part);
        }

        Ok(form)
    }
}

#[async_trait]
impl SubmitTransport for WebhookTransport {
    async fn send(&self, payload: SubmissionPayload) -> Result<(), SubmitError> {
        let file_count = payload.files.len();
        let form = Self::build_form(payload)?;

        debug!(endpoint = %self.endpoint, files = file_count, "Posting application");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, endpoint = %self.endpoint, "Failed to reach webhook");
                SubmitError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "Webhook rejected submission");
            return Err(SubmitError::RejectedStatus(status.as_u16()));
        }

        info!(status = status.as_u16(), "Webhook accepted submission");
        Ok(())
    }
}
