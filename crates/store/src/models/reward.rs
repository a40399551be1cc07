use serde::{Deserialize, Serialize};

use roomreel_core::types::{Id, Timestamp};

/// The prize drawn for a submission. Created exactly once per submission
/// and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: Id,
    pub submission_id: Id,
    pub reward_type: String,
    pub reward_value: String,
    /// Whether the user has claimed the prize. Fulfilment is simulated;
    /// this starts false and nothing in the current flow flips it.
    pub claimed: bool,
    pub created_at: Timestamp,
}

/// DTO for persisting a drawn reward.
#[derive(Debug, Clone)]
pub struct CreateReward {
    pub submission_id: Id,
    pub reward_type: String,
    pub reward_value: String,
}
