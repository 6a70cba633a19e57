//! Dashboard service - Derived statistics per role.
//!
//! Pure aggregations over the current data snapshot, recomputed on every
//! call; nothing here is cached since the source data is fixed within a
//! session.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{Project, ProjectStatus};
use crate::errors::{AppResult, OptionExt};
use crate::store::{ApplicationRepository, ProjectRepository, WriterRepository};

/// Platform-wide numbers shown on the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminOverview {
    pub pending_applications: usize,
    pub total_writers: usize,
    pub total_projects: usize,
    pub active_projects: usize,
}

/// A student's projects partitioned by status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentOverview {
    pub active: Vec<Project>,
    pub completed: Vec<Project>,
    pub pending: Vec<Project>,
}

/// A writer's headline numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriterOverview {
    pub earnings: Decimal,
    pub completed_projects: u32,
    pub rating: f32,
    pub active_projects: usize,
}

/// Dashboard service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Admin dashboard numbers
    async fn admin_overview(&self) -> AppResult<AdminOverview>;

    /// Status partition of the given student's projects
    async fn student_overview(&self, student_id: &str) -> AppResult<StudentOverview>;

    /// Headline numbers for the given writer
    async fn writer_overview(&self, writer_id: &str) -> AppResult<WriterOverview>;
}

/// Concrete implementation of DashboardService over the catalog repositories.
pub struct Dashboards {
    applications: Arc<dyn ApplicationRepository>,
    writers: Arc<dyn WriterRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl Dashboards {
    /// Create a new dashboard service instance
    pub fn new(
        applications: Arc<dyn ApplicationRepository>,
        writers: Arc<dyn WriterRepository>,
        projects: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            applications,
            writers,
            projects,
        }
    }
}

#[async_trait]
impl DashboardService for Dashboards {
    async fn admin_overview(&self) -> AppResult<AdminOverview> {
        let applications = self.applications.list()?;
        let writers = self.writers.list()?;
        let projects = self.projects.list()?;

        Ok(AdminOverview {
            pending_applications: applications
                .iter()
                .filter(|a| a.status.is_pending())
                .count(),
            total_writers: writers.len(),
            total_projects: projects.len(),
            active_projects: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::InProgress)
                .count(),
        })
    }

    async fn student_overview(&self, student_id: &str) -> AppResult<StudentOverview> {
        let projects = self.projects.find_by_student(student_id)?;

        let mut overview = StudentOverview {
            active: Vec::new(),
            completed: Vec::new(),
            pending: Vec::new(),
        };
        for project in projects {
            match project.status {
                ProjectStatus::InProgress => overview.active.push(project),
                ProjectStatus::Completed => overview.completed.push(project),
                ProjectStatus::Pending => overview.pending.push(project),
                // Revisions stay out of the headline partition, as in the
                // original dashboard.
                ProjectStatus::Revision => {}
            }
        }
        Ok(overview)
    }

    async fn writer_overview(&self, writer_id: &str) -> AppResult<WriterOverview> {
        let writer = self.writers.find_by_id(writer_id)?.ok_or_not_found()?;
        let assigned = self.projects.find_by_writer(writer_id)?;

        Ok(WriterOverview {
            earnings: writer.earnings,
            completed_projects: writer.completed_projects,
            rating: writer.rating,
            active_projects: assigned
                .iter()
                .filter(|p| p.status == ProjectStatus::InProgress)
                .count(),
        })
    }
}
