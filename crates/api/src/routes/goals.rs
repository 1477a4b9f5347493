//! Route definitions for career goals.
//!
//! Paths keep their trailing slashes; existing clients call them verbatim.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::goals;
use crate::state::AppState;

/// Goal routes.
///
/// ```text
/// GET    /goals/                  -> list_goals
/// POST   /goals/                  -> create_goal
/// GET    /goals/{id}/             -> get_goal
/// PUT    /goals/{id}/             -> replace_goal
/// DELETE /goals/{id}/             -> delete_goal
/// PUT    /goals/{id}/increment/   -> increment_goal (strict)
/// PATCH  /goals/{id}/increment/   -> increment_goal_lenient
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/goals/", get(goals::list_goals).post(goals::create_goal))
        .route(
            "/goals/{id}/",
            get(goals::get_goal)
                .put(goals::replace_goal)
                .delete(goals::delete_goal),
        )
        .route(
            "/goals/{id}/increment/",
            put(goals::increment_goal).patch(goals::increment_goal_lenient),
        )
}
