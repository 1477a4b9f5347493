//! Response payload types for the goals API.
//!
//! The goals endpoints predate any `{ "data": ... }` envelope, so each
//! payload shape here is part of the external contract.

use careerplan_db::models::goal::Goal;
use serde::Serialize;

/// Message returned after a goal is deleted.
pub const MSG_GOAL_DELETED: &str = "Goal deleted successfully";

/// Message returned by the lenient increment when the goal was advanced.
pub const MSG_PROGRESS_UPDATED: &str = "Progress updated";

/// Message returned by the lenient increment when no goal matched.
pub const MSG_GOAL_NOT_FOUND: &str = "Goal not found";

/// `{ "message": ... }` acknowledgment.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "updated_goal": Goal }`, used by the strict increment and replace.
#[derive(Debug, Serialize)]
pub struct UpdatedGoalResponse {
    pub updated_goal: Goal,
}

/// `{ "message": ..., "goal": Goal }` from the lenient increment.
///
/// `goal` is omitted entirely when the id did not match.
#[derive(Debug, Serialize)]
pub struct ProgressUpdateResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
}
