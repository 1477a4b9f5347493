//! Repository for the `goals` table.

use careerplan_core::goal_progress::{self, AdvancePolicy};
use careerplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::goal::{AdvanceOutcome, CreateGoal, Goal, ReplaceGoal};

/// Column list for goals queries.
const COLUMNS: &str = "id, title, description, milestones, progress, estimated_days, elapsed_days";

/// Provides CRUD and progress operations for career goals.
pub struct GoalRepo;

impl GoalRepo {
    /// List all goals in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals ORDER BY id ASC");
        sqlx::query_as::<_, Goal>(&query).fetch_all(pool).await
    }

    /// Find a goal by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new goal with zero elapsed days, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGoal) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals (title, description, milestones, progress, estimated_days, elapsed_days)
             VALUES ($1, $2, $3, $4, $5, 0)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.milestones)
            .bind(input.progress)
            .bind(input.estimated_days)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a goal's editable fields and reset its elapsed days.
    ///
    /// Stored `progress` is left as it was. Returns `None` if no goal has
    /// the given ID.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &ReplaceGoal,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET
                title = $2,
                description = $3,
                milestones = $4,
                estimated_days = $5,
                elapsed_days = 0
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.milestones)
            .bind(input.estimated_days)
            .fetch_optional(pool)
            .await
    }

    /// Delete a goal by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Advance a goal by one day, refusing goals that are already complete.
    ///
    /// The step that reaches the estimate sets progress to exactly 100.
    pub async fn advance_once(pool: &PgPool, id: DbId) -> Result<AdvanceOutcome, sqlx::Error> {
        Self::advance(pool, id, AdvancePolicy::Strict).await
    }

    /// Advance a goal by one day with no upper bound.
    ///
    /// Elapsed days may run past the estimate, pushing progress above 100.
    pub async fn advance_once_lenient(
        pool: &PgPool,
        id: DbId,
    ) -> Result<AdvanceOutcome, sqlx::Error> {
        Self::advance(pool, id, AdvancePolicy::Lenient).await
    }

    /// Shared read-modify-write for both advance policies.
    ///
    /// The row is locked with `FOR UPDATE` for the duration of the
    /// transaction, so concurrent advances of one goal are applied one
    /// after another. Early returns drop the transaction, rolling it back.
    async fn advance(
        pool: &PgPool,
        id: DbId,
        policy: AdvancePolicy,
    ) -> Result<AdvanceOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM goals WHERE id = $1 FOR UPDATE");
        let Some(goal) = sqlx::query_as::<_, Goal>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(AdvanceOutcome::NotFound);
        };

        let step = match goal_progress::advance(goal.elapsed_days, goal.estimated_days, policy) {
            Ok(step) => step,
            Err(rejection) => {
                tracing::debug!(
                    goal_id = id,
                    ?policy,
                    elapsed_days = goal.elapsed_days,
                    estimated_days = goal.estimated_days,
                    %rejection,
                    "Goal advance rejected"
                );
                return Ok(AdvanceOutcome::Rejected(rejection));
            }
        };

        let update = format!(
            "UPDATE goals SET elapsed_days = $2, progress = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Goal>(&update)
            .bind(id)
            .bind(step.elapsed_days)
            .bind(step.progress)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(AdvanceOutcome::Advanced(updated))
    }
}
