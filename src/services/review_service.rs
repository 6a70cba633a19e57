//! Review service - Admin approval workflow for writer applications.
//!
//! Orchestrates the domain transition rules against the application
//! repository. Approval does not create a writer profile; the two
//! collections are intentionally unlinked in this scope.

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{ApplicationStatus, WriterApplication};
use crate::errors::{AppResult, OptionExt};
use crate::store::ApplicationRepository;

/// Review service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// All applications in insertion order
    async fn list_applications(&self) -> AppResult<Vec<WriterApplication>>;

    /// Approve a pending application
    async fn approve(&self, id: &str) -> AppResult<WriterApplication>;

    /// Reject a pending application
    async fn reject(&self, id: &str) -> AppResult<WriterApplication>;
}

/// Concrete implementation of ReviewService over the application repository.
pub struct ApplicationReviewer {
    applications: Arc<dyn ApplicationRepository>,
}

impl ApplicationReviewer {
    /// Create a new review service instance
    pub fn new(applications: Arc<dyn ApplicationRepository>) -> Self {
        Self { applications }
    }

    fn resolve(&self, id: &str, verdict: ApplicationStatus) -> AppResult<WriterApplication> {
        let application = self.applications.find_by_id(id)?.ok_or_not_found()?;
        let resolved = application.resolve(verdict)?;
        tracing::info!(id, status = %resolved.status, "Application resolved");
        self.applications.save(resolved)
    }
}

#[async_trait]
impl ReviewService for ApplicationReviewer {
    async fn list_applications(&self) -> AppResult<Vec<WriterApplication>> {
        self.applications.list()
    }

    async fn approve(&self, id: &str) -> AppResult<WriterApplication> {
        self.resolve(id, ApplicationStatus::Approved)
    }

    async fn reject(&self, id: &str) -> AppResult<WriterApplication> {
        self.resolve(id, ApplicationStatus::Rejected)
    }
}
