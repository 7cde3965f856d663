// Common module - shared types and utilities across all modules

pub mod config;
pub mod logging;
pub mod notify;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::FormConfig;
pub use notify::{Notice, Notifier, Severity, TracingNotifier};
pub use validation::{ValidationError, ValidationResult, Validator};
