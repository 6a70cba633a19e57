//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_STUDENT_ID, DEFAULT_WRITER_ID};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional path to a JSON seed file overriding the built-in dataset
    pub seed_path: Option<String>,
    /// Student id the student dashboard commands default to
    pub student_id: String,
    /// Writer id the writer dashboard commands default to
    pub writer_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            seed_path: env::var("SEED_PATH").ok(),
            student_id: env::var("DEMO_STUDENT_ID")
                .unwrap_or_else(|_| DEFAULT_STUDENT_ID.to_string()),
            writer_id: env::var("DEMO_WRITER_ID")
                .unwrap_or_else(|_| DEFAULT_WRITER_ID.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            student_id: DEFAULT_STUDENT_ID.to_string(),
            writer_id: DEFAULT_WRITER_ID.to_string(),
        }
    }
}
