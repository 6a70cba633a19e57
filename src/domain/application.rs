//! Writer application entity and its review state machine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Review status of a writer application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ApplicationStatus::Pending)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Application submitted by a prospective writer.
///
/// Created by seed data, never deleted; the only mutable field is `status`,
/// owned by the admin review flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterApplication {
    pub id: String,
    pub name: String,
    pub email: String,
    pub expertise: Vec<String>,
    pub experience: String,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
}

impl WriterApplication {
    /// Apply a review verdict.
    ///
    /// Transitions are one-way: `pending -> approved` and
    /// `pending -> rejected`. Re-applying the verdict the application
    /// already carries is an accepted no-op; any other transition from a
    /// resolved state is rejected.
    pub fn resolve(mut self, verdict: ApplicationStatus) -> AppResult<Self> {
        if self.status == verdict {
            return Ok(self);
        }
        if !self.status.is_pending() || verdict.is_pending() {
            return Err(AppError::InvalidTransition {
                from: self.status,
                to: verdict,
            });
        }
        self.status = verdict;
        Ok(self)
    }
}
