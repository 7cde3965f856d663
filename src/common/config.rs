// Environment-driven configuration

use dotenv::dotenv;
use std::env;

pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/job-application";

#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Endpoint the multipart submission is POSTed to.
    pub webhook_url: String,
}

impl FormConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        let webhook_url =
            env::var("WEBHOOK_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());

        Self { webhook_url }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
        }
    }
}
