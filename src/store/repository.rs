//! Repository traits - Data access abstraction
//!
//! The catalog behind these traits is seeded in-memory data, but the
//! seams are where a real persistence backend would plug in.

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{Project, Writer, WriterApplication};
use crate::errors::AppResult;

/// Writer application access
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ApplicationRepository: Send + Sync {
    /// All applications in insertion order
    fn list(&self) -> AppResult<Vec<WriterApplication>>;

    /// Find an application by id
    fn find_by_id(&self, id: &str) -> AppResult<Option<WriterApplication>>;

    /// Replace the stored record with the same id.
    ///
    /// Touches exactly that record; every other record keeps its value
    /// and position.
    fn save(&self, application: WriterApplication) -> AppResult<WriterApplication>;
}

/// Writer profile access (read-only in this scope)
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait WriterRepository: Send + Sync {
    /// All writers in insertion order
    fn list(&self) -> AppResult<Vec<Writer>>;

    /// Find a writer by id
    fn find_by_id(&self, id: &str) -> AppResult<Option<Writer>>;
}

/// Project access (read-only in this scope)
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ProjectRepository: Send + Sync {
    /// All projects in insertion order
    fn list(&self) -> AppResult<Vec<Project>>;

    /// Projects assigned to the given writer, in insertion order
    fn find_by_writer(&self, writer_id: &str) -> AppResult<Vec<Project>>;

    /// Projects posted by the given student, in insertion order
    fn find_by_student(&self, student_id: &str) -> AppResult<Vec<Project>>;
}
