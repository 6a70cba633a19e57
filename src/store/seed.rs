//! Seed dataset standing in for a real backend.
//!
//! The built-in dataset is embedded JSON; a file supplied via `SEED_PATH`
//! can replace it. Every loaded record is checked against its domain
//! invariants before the catalog accepts it.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Project, Writer, WriterApplication};
use crate::errors::AppResult;

/// Built-in sample dataset
const BUILTIN_SEED: &str = include_str!("seed.json");

/// Raw seed file contents
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub applications: Vec<WriterApplication>,
    pub writers: Vec<Writer>,
    pub projects: Vec<Project>,
}

impl SeedData {
    /// Parse the embedded sample dataset.
    pub fn builtin() -> AppResult<Self> {
        let seed: SeedData = serde_json::from_str(BUILTIN_SEED)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Parse a seed file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let raw = fs::read_to_string(path)?;
        let seed: SeedData = serde_json::from_str(&raw)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Check every record against its domain invariants.
    fn validate(&self) -> AppResult<()> {
        for writer in &self.writers {
            writer.validate_invariants()?;
        }
        for project in &self.projects {
            project.validate_invariants()?;
        }
        Ok(())
    }
}
