//! Persisted entity models and create-DTOs.
//!
//! Wire names stay camelCase to preserve the original client contract, so
//! every model carries `#[serde(rename_all = "camelCase")]`.

mod challenge;
mod reward;
mod submission;
mod user;

pub use challenge::{Challenge, ChallengeStep, CreateChallenge};
pub use reward::{CreateReward, Reward};
pub use submission::{CreateSubmission, Submission, VideoClip};
pub use user::{CreateUser, User};
