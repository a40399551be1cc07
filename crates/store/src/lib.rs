//! Storage capability for the RoomReel Challenge backend.
//!
//! Handlers depend on the [`Store`] trait only, so the backing
//! implementation can be swapped without touching request logic. The
//! shipped backend is [`MemoryStore`], an in-process map store seeded with
//! the default challenge catalog; records live until process restart.

pub mod memory;
pub mod models;

use async_trait::async_trait;

use models::{
    Challenge, CreateChallenge, CreateReward, CreateSubmission, CreateUser, Reward, Submission,
    User,
};
use roomreel_core::types::Id;

pub use memory::MemoryStore;

/// Storage-level error type.
///
/// `NotFound`/`Conflict` carry enough context for the HTTP layer to build
/// a client-facing message; `Internal` is for backend faults and is
/// sanitized at the request boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Internal(String),
}

/// Convenience alias for storage results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Entity get/create operations required by the request handlers.
///
/// All records are created once and never mutated. Lookups for absent ids
/// return `Ok(None)`; errors are reserved for invariant violations and
/// backend faults.
#[async_trait]
pub trait Store: Send + Sync {
    // -- Challenges --

    /// All challenges in catalog order.
    async fn list_challenges(&self) -> StoreResult<Vec<Challenge>>;

    /// Look up a challenge by slug.
    async fn get_challenge(&self, id: &str) -> StoreResult<Option<Challenge>>;

    /// Create a challenge with a generated id.
    async fn create_challenge(&self, input: CreateChallenge) -> StoreResult<Challenge>;

    // -- Submissions --

    async fn get_submission(&self, id: Id) -> StoreResult<Option<Submission>>;

    /// Create a submission with a generated id and completion timestamp.
    async fn create_submission(&self, input: CreateSubmission) -> StoreResult<Submission>;

    // -- Rewards --

    /// Persist the reward drawn for a submission.
    ///
    /// Enforces the reward invariants: the submission must exist
    /// (`NotFound` otherwise) and must not already have a reward
    /// (`Conflict` otherwise) -- the draw happens exactly once.
    async fn create_reward(&self, input: CreateReward) -> StoreResult<Reward>;

    /// The reward drawn for a submission, if any.
    async fn reward_for_submission(&self, submission_id: Id) -> StoreResult<Option<Reward>>;

    // -- Users --

    async fn get_user(&self, id: Id) -> StoreResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    async fn create_user(&self, input: CreateUser) -> StoreResult<User>;
}
