//! Store layer - Seeded in-memory data access
//!
//! Repository traits abstract the data source; the in-memory catalog is
//! the only implementation in this scope and stands in for the backend
//! persistence collaborator.

mod catalog;
mod repository;
mod seed;

pub use catalog::InMemoryCatalog;
pub use repository::{ApplicationRepository, ProjectRepository, WriterRepository};
pub use seed::SeedData;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use repository::{MockApplicationRepository, MockProjectRepository, MockWriterRepository};
