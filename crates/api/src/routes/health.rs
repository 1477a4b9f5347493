//! `GET /health`: process liveness plus a look at the goals store.
//!
//! Always answers 200 so load balancers can read the body. `status` drops to
//! `"degraded"` and `store` is omitted when the `goals` table cannot be
//! queried.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use careerplan_db::StoreStatus;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreStatus>,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let store = match careerplan_db::store_status(&state.pool).await {
        Ok(store) => Some(store),
        Err(err) => {
            tracing::warn!(error = %err, "Goals store unreachable");
            None
        }
    };

    Json(HealthReport {
        status: if store.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
