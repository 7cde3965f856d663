// src/form/mod.rs

pub mod controller;
pub mod events;
pub mod models;
pub mod validators;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use controller::{FormController, SubmitOutcome};
pub use events::FormEvent;
pub use models::{ExperienceLevel, Field, FormFields, FormSnapshot};
