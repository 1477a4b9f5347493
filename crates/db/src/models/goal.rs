//! Career goal model.

use careerplan_core::goal_progress::{AdvanceRejection, DEFAULT_PROGRESS};
use careerplan_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `goals` table, in its wire shape.
///
/// `created_at` / `updated_at` exist in the table but are not selected.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Goal {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub milestones: Vec<String>,
    pub progress: f64,
    pub estimated_days: i32,
    pub elapsed_days: i32,
}

/// DTO for creating a new goal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoal {
    pub title: String,
    pub description: String,
    pub milestones: Vec<String>,
    #[serde(default = "default_progress")]
    pub progress: f64,
    pub estimated_days: i32,
}

/// DTO for a full replacement of a goal's editable fields.
///
/// Clients send the same body as for creation. A `progress` field, if
/// present, is accepted and ignored: replacing a goal keeps its stored
/// progress.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceGoal {
    pub title: String,
    pub description: String,
    pub milestones: Vec<String>,
    pub estimated_days: i32,
}

/// Result of one advance attempt against a stored goal.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// The row was updated; carries the new state.
    Advanced(Goal),
    /// No goal has the requested id.
    NotFound,
    /// The goal exists but the policy refused the step. Nothing was written.
    Rejected(AdvanceRejection),
}

fn default_progress() -> f64 {
    DEFAULT_PROGRESS
}
