//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `login` / `signup` - Mock session walkthrough
//! - `applications` - Admin application review
//! - `projects` - Project queries
//! - `stats` - Per-role dashboard overviews

pub mod args;

pub use args::{Cli, Commands};
