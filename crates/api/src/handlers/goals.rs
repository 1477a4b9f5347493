//! Handlers for career goals.
//!
//! Two increment endpoints coexist with different contracts:
//! `PUT /goals/{id}/increment/` reports a missing goal as 404 and a completed
//! one as 400, while `PATCH /goals/{id}/increment/` always answers 200 and
//! signals a missing goal in the payload.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use careerplan_core::error::CoreError;
use careerplan_core::goal_progress::AdvanceRejection;
use careerplan_core::types::DbId;
use careerplan_db::models::goal::{AdvanceOutcome, CreateGoal, ReplaceGoal};
use careerplan_db::repositories::GoalRepo;

use crate::error::{AppError, AppResult};
use crate::response::{
    MessageResponse, ProgressUpdateResponse, UpdatedGoalResponse, MSG_GOAL_DELETED,
    MSG_GOAL_NOT_FOUND, MSG_PROGRESS_UPDATED,
};
use crate::state::AppState;

const ENTITY: &str = "Goal";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

fn rejected(id: DbId, rejection: AdvanceRejection) -> AppError {
    match rejection {
        AdvanceRejection::AlreadyComplete => {
            AppError::Core(CoreError::AlreadyComplete { entity: ENTITY, id })
        }
        AdvanceRejection::ZeroEstimate | AdvanceRejection::ElapsedOverflow => {
            AppError::Core(CoreError::Internal(format!("{ENTITY} {id}: {rejection}")))
        }
    }
}

/// POST /goals/
///
/// Create a goal. Responds 200 with the stored goal.
pub async fn create_goal(
    State(state): State<AppState>,
    Json(input): Json<CreateGoal>,
) -> AppResult<impl IntoResponse> {
    let goal = GoalRepo::create(&state.pool, &input).await?;

    tracing::info!(
        goal_id = goal.id,
        estimated_days = goal.estimated_days,
        milestones = goal.milestones.len(),
        "Goal created"
    );

    Ok(Json(goal))
}

/// GET /goals/
pub async fn list_goals(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let goals = GoalRepo::list(&state.pool).await?;
    Ok(Json(goals))
}

/// GET /goals/{id}/
pub async fn get_goal(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let goal = GoalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(goal))
}

/// DELETE /goals/{id}/
pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !GoalRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(goal_id = id, "Goal deleted");

    Ok(Json(MessageResponse {
        message: MSG_GOAL_DELETED,
    }))
}

/// PUT /goals/{id}/increment/
///
/// Advance one day. 404 if absent, 400 if the goal is already complete.
pub async fn increment_goal(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match GoalRepo::advance_once(&state.pool, id).await? {
        AdvanceOutcome::Advanced(goal) => {
            tracing::info!(
                goal_id = id,
                elapsed_days = goal.elapsed_days,
                progress = goal.progress,
                "Goal advanced"
            );
            Ok(Json(UpdatedGoalResponse { updated_goal: goal }))
        }
        AdvanceOutcome::NotFound => Err(not_found(id)),
        AdvanceOutcome::Rejected(rejection) => Err(rejected(id, rejection)),
    }
}

/// PATCH /goals/{id}/increment/
///
/// Advance one day with no completion check. A missing goal is reported as
/// a 200 with a "Goal not found" message.
pub async fn increment_goal_lenient(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match GoalRepo::advance_once_lenient(&state.pool, id).await? {
        AdvanceOutcome::Advanced(goal) => {
            tracing::info!(
                goal_id = id,
                elapsed_days = goal.elapsed_days,
                progress = goal.progress,
                "Goal advanced (lenient)"
            );
            Ok(Json(ProgressUpdateResponse {
                message: MSG_PROGRESS_UPDATED,
                goal: Some(goal),
            }))
        }
        AdvanceOutcome::NotFound => Ok(Json(ProgressUpdateResponse {
            message: MSG_GOAL_NOT_FOUND,
            goal: None,
        })),
        AdvanceOutcome::Rejected(rejection) => Err(rejected(id, rejection)),
    }
}

/// PUT /goals/{id}/
///
/// Replace title, description, milestones and estimate. Elapsed days reset
/// to zero; stored progress is kept as is.
pub async fn replace_goal(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplaceGoal>,
) -> AppResult<impl IntoResponse> {
    let goal = GoalRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        goal_id = id,
        estimated_days = goal.estimated_days,
        "Goal replaced"
    );

    Ok(Json(UpdatedGoalResponse { updated_goal: goal }))
}
