//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod applications;
pub mod projects;
pub mod session;
pub mod stats;
