//! Route handlers.

use axum::{Router, routing::post};

use crate::state::AppState;

pub mod draft_orders;

/// All gateway routes (health checks are mounted in `main`).
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/draft-orders", post(draft_orders::create))
}
