//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod application;
pub mod identity;
pub mod project;
pub mod writer;

pub use application::{ApplicationStatus, WriterApplication};
pub use identity::{Identity, LoginRequest, Role, SignupRequest};
pub use project::{NewProject, Project, ProjectStatus};
pub use writer::Writer;
