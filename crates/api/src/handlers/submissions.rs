//! Handlers for the `/submissions` resource.
//!
//! `POST /submissions` is where the reward draw happens: one weighted
//! draw per created submission, persisted atomically with it from the
//! client's point of view.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use roomreel_core::error::CoreError;
use roomreel_core::types::{Id, Timestamp};
use roomreel_store::models::{CreateReward, CreateSubmission, Reward, Submission, VideoClip};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// One clip entry in a submission request.
///
/// `Serialize` is required by the `length` check on
/// `CreateSubmissionRequest::video_clips`, which embeds the offending
/// value in its field-error params.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VideoClipInput {
    #[validate(range(min = 1, message = "stepId must be positive"))]
    pub step_id: i32,
    /// Recorded length in seconds.
    #[validate(range(exclusive_min = 0.0, message = "duration must be positive"))]
    pub duration: f64,
    /// Clip size in bytes.
    pub size: u64,
    pub timestamp: Timestamp,
}

impl From<VideoClipInput> for VideoClip {
    fn from(input: VideoClipInput) -> Self {
        VideoClip {
            step_id: input.step_id,
            duration: input.duration,
            size: input.size,
            timestamp: input.timestamp,
        }
    }
}

/// Request body for `POST /submissions`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    #[validate(length(min = 1, message = "challengeId must not be empty"))]
    pub challenge_id: String,
    #[validate(
        length(min = 1, message = "at least one video clip is required"),
        nested
    )]
    pub video_clips: Vec<VideoClipInput>,
    #[validate(range(min = 0, message = "totalPoints must not be negative"))]
    pub total_points: i32,
    pub user_id: Option<Id>,
}

/// Response payload pairing a submission with its drawn reward.
///
/// The reward is always present for a freshly created submission; for
/// lookups it mirrors whatever the store holds.
#[derive(Debug, Serialize)]
pub struct SubmissionWithReward {
    pub submission: Submission,
    pub reward: Option<Reward>,
}

// ---------------------------------------------------------------------------
// POST /submissions
// ---------------------------------------------------------------------------

/// Create a submission and draw its reward.
///
/// The draw happens exactly once, after the submission row exists, so the
/// reward's `submissionId` always references a persisted submission.
pub async fn create_submission(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSubmissionRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let challenge = state
        .store
        .get_challenge(&input.challenge_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Challenge",
                id: input.challenge_id.clone(),
            })
        })?;

    let submission = state
        .store
        .create_submission(CreateSubmission {
            user_id: input.user_id,
            challenge_id: challenge.id,
            video_clips: input.video_clips.into_iter().map(Into::into).collect(),
            total_points: input.total_points,
        })
        .await?;

    let picked = state.drawer.draw();
    let reward = state
        .store
        .create_reward(CreateReward {
            submission_id: submission.id,
            reward_type: picked.kind.to_string(),
            reward_value: picked.value.to_string(),
        })
        .await?;

    tracing::info!(
        submission_id = %submission.id,
        challenge_id = %submission.challenge_id,
        reward = %reward.reward_value,
        "Submission created and reward drawn"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmissionWithReward {
            submission,
            reward: Some(reward),
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /submissions/{id}
// ---------------------------------------------------------------------------

/// Get a submission and its reward by id.
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<SubmissionWithReward>> {
    let submission = state.store.get_submission(id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id: id.to_string(),
        })
    })?;

    let reward = state.store.reward_for_submission(submission.id).await?;

    Ok(Json(SubmissionWithReward { submission, reward }))
}
