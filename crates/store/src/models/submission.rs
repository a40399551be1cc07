use serde::{Deserialize, Serialize};

use roomreel_core::types::{Id, Timestamp};

/// Metadata for one recorded clip. The video bytes themselves never reach
/// the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoClip {
    pub step_id: i32,
    /// Recorded length in seconds.
    pub duration: f64,
    /// Clip size in bytes.
    pub size: u64,
    pub timestamp: Timestamp,
}

/// A finalized challenge run: the bundle of clip metadata sent for reward
/// evaluation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id>,
    pub challenge_id: String,
    pub video_clips: Vec<VideoClip>,
    pub total_points: i32,
    pub completed_at: Timestamp,
}

/// DTO for creating a submission; the store assigns id and completion time.
#[derive(Debug, Clone)]
pub struct CreateSubmission {
    pub user_id: Option<Id>,
    pub challenge_id: String,
    pub video_clips: Vec<VideoClip>,
    pub total_points: i32,
}
