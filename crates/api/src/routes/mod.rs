//! Route table assembly.

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{challenges, rewards, submissions};
use crate::state::AppState;

/// All `/api` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/challenges", get(challenges::list_challenges))
        .route("/challenges/{id}", get(challenges::get_challenge))
        .route("/rewards/preview", get(rewards::preview))
        .route("/submissions", post(submissions::create_submission))
        .route("/submissions/{id}", get(submissions::get_submission))
}
