//! Project entity and the new-project request form.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{PROGRESS_COMPLETE, RATING_MAX};
use crate::errors::{AppError, AppResult};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Pending,
    InProgress,
    Completed,
    Revision,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Pending => write!(f, "pending"),
            ProjectStatus::InProgress => write!(f, "in-progress"),
            ProjectStatus::Completed => write!(f, "completed"),
            ProjectStatus::Revision => write!(f, "revision"),
        }
    }
}

/// Project posted by a student and optionally assigned to a writer.
///
/// References the student and writer by id only; no referential-integrity
/// enforcement is required since records are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub student_id: String,
    pub student_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer_name: Option<String>,
    pub status: ProjectStatus,
    pub deadline: NaiveDate,
    pub created_date: NaiveDate,
    /// Completion percentage, 0..=100
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    pub payment: Decimal,
    pub subject: String,
}

impl Project {
    /// Whether a writer has been assigned
    pub fn is_assigned(&self) -> bool {
        self.writer_id.is_some()
    }

    /// Check the record against its domain invariants:
    /// writer name travels with writer id, rating/review appear only on
    /// completed projects, and progress is 100 exactly when completed.
    pub fn validate_invariants(&self) -> AppResult<()> {
        if self.writer_id.is_some() != self.writer_name.is_some() {
            return Err(AppError::validation(format!(
                "project {}: writer id and name must be set together",
                self.id
            )));
        }
        if self.progress > PROGRESS_COMPLETE {
            return Err(AppError::validation(format!(
                "project {}: progress {} exceeds 100",
                self.id, self.progress
            )));
        }
        let completed = self.status == ProjectStatus::Completed;
        if completed != (self.progress == PROGRESS_COMPLETE) {
            return Err(AppError::validation(format!(
                "project {}: progress {} inconsistent with status {}",
                self.id, self.progress, self.status
            )));
        }
        if !completed && (self.rating.is_some() || self.review.is_some()) {
            return Err(AppError::validation(format!(
                "project {}: rating/review only allowed when completed",
                self.id
            )));
        }
        if let Some(rating) = self.rating {
            if !(0.0..=RATING_MAX).contains(&rating) {
                return Err(AppError::validation(format!(
                    "project {}: rating {} outside 0..=5",
                    self.id, rating
                )));
            }
        }
        if self.payment < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "project {}: negative payment",
                self.id
            )));
        }
        Ok(())
    }
}

/// New project form submitted by a student.
///
/// All fields are required. In the current scope a validated draft is built
/// but never committed to the shared dataset, matching the original
/// client-side form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub deadline: NaiveDate,
    pub budget: Decimal,
}

impl NewProject {
    /// Build the unassigned draft project this form would create.
    pub fn into_draft(
        self,
        id: String,
        student_id: String,
        student_name: String,
        created_date: NaiveDate,
    ) -> AppResult<Project> {
        if self.budget < Decimal::ZERO {
            return Err(AppError::validation("budget must not be negative"));
        }
        let project = Project {
            id,
            title: self.title,
            description: self.description,
            student_id,
            student_name,
            writer_id: None,
            writer_name: None,
            status: ProjectStatus::Pending,
            deadline: self.deadline,
            created_date,
            progress: 0,
            rating: None,
            review: None,
            payment: self.budget,
            subject: self.subject,
        };
        project.validate_invariants()?;
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_project() -> Project {
        Project {
            id: "p2".to_string(),
            title: "Renaissance Art History Essay".to_string(),
            description: "Comparative analysis".to_string(),
            student_id: "s2".to_string(),
            student_name: "Jessica Lee".to_string(),
            writer_id: Some("w1".to_string()),
            writer_name: Some("Emily Rodriguez".to_string()),
            status: ProjectStatus::Completed,
            deadline: NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
            created_date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
            progress: 100,
            rating: Some(5.0),
            review: Some("Excellent work!".to_string()),
            payment: Decimal::from(180u32),
            subject: "History".to_string(),
        }
    }

    #[test]
    fn completed_project_satisfies_invariants() {
        assert!(completed_project().validate_invariants().is_ok());
    }

    #[test]
    fn completed_requires_full_progress() {
        let mut project = completed_project();
        project.progress = 65;
        assert!(project.validate_invariants().is_err());
    }

    #[test]
    fn rating_requires_completion() {
        let mut project = completed_project();
        project.status = ProjectStatus::InProgress;
        project.progress = 65;
        assert!(project.validate_invariants().is_err());
    }

    #[test]
    fn writer_name_travels_with_writer_id() {
        let mut project = completed_project();
        project.writer_name = None;
        assert!(project.validate_invariants().is_err());
    }

    #[test]
    fn draft_starts_pending_and_unassigned() {
        let form = NewProject {
            title: "Research Paper on Climate Change".to_string(),
            subject: "Other".to_string(),
            description: "Detailed requirements".to_string(),
            deadline: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            budget: Decimal::from(150u32),
        };
        let draft = form
            .into_draft(
                "p6".to_string(),
                "s1".to_string(),
                "Alex Turner".to_string(),
                NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
            )
            .unwrap();
        assert_eq!(draft.status, ProjectStatus::Pending);
        assert_eq!(draft.progress, 0);
        assert!(!draft.is_assigned());
    }
}
