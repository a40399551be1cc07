use serde::{Deserialize, Serialize};

use roomreel_core::types::Timestamp;

/// One guided recording prompt within a challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeStep {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub emoji: String,
    /// Suggested clip length in seconds.
    pub duration: u32,
}

/// A themed sequence of recording prompts.
///
/// Keyed by a human-readable slug (`"room-tour"`) rather than a UUID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub steps: Vec<ChallengeStep>,
    pub points_per_step: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a new challenge.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChallenge {
    pub name: String,
    pub description: String,
    pub steps: Vec<ChallengeStep>,
    pub points_per_step: i32,
}
