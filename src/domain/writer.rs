//! Writer profile entity.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RATING_MAX;
use crate::errors::{AppError, AppResult};

/// Approved writer profile.
///
/// Immutable in this scope; profile edits in the original product are
/// UI-local and never committed back to the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Writer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub expertise: Vec<String>,
    /// Average rating on a five-star scale
    pub rating: f32,
    pub completed_projects: u32,
    pub earnings: Decimal,
    pub joined_date: NaiveDate,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

impl Writer {
    /// Check the record against its domain invariants.
    pub fn validate_invariants(&self) -> AppResult<()> {
        if !(0.0..=RATING_MAX).contains(&self.rating) {
            return Err(AppError::validation(format!(
                "writer {}: rating {} outside 0..=5",
                self.id, self.rating
            )));
        }
        if self.earnings < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "writer {}: negative earnings",
                self.id
            )));
        }
        Ok(())
    }
}
