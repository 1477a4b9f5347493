pub mod goals;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Every route the service exposes, unlayered and without state.
pub fn router() -> Router<AppState> {
    Router::new().merge(health::router()).merge(goals::router())
}
