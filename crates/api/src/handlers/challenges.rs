//! Handlers for the `/challenges` resource.

use axum::extract::{Path, State};
use axum::Json;

use roomreel_core::error::CoreError;
use roomreel_store::models::Challenge;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /challenges
// ---------------------------------------------------------------------------

/// List the full challenge catalog.
pub async fn list_challenges(State(state): State<AppState>) -> AppResult<Json<Vec<Challenge>>> {
    let items = state.store.list_challenges().await?;
    tracing::debug!(count = items.len(), "Listed challenges");
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// GET /challenges/{id}
// ---------------------------------------------------------------------------

/// Get a single challenge by slug.
pub async fn get_challenge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Challenge>> {
    let challenge = state.store.get_challenge(&id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Challenge",
            id: id.clone(),
        })
    })?;
    Ok(Json(challenge))
}
