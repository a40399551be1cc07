//! In-memory [`Store`] backend.
//!
//! Process-wide maps guarded by `tokio::sync::RwLock`; axum serves
//! requests concurrently, so unlike a single-threaded event loop the maps
//! need synchronization. Guards are never held across other storage
//! awaits. All data is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use roomreel_core::types::Id;

use crate::models::{
    Challenge, ChallengeStep, CreateChallenge, CreateReward, CreateSubmission, CreateUser, Reward,
    Submission, User,
};
use crate::{Store, StoreError, StoreResult};

/// Map-backed store. Construct via [`MemoryStore::new`] (empty) or
/// [`MemoryStore::with_default_challenges`] (production seed data).
#[derive(Default)]
pub struct MemoryStore {
    challenges: RwLock<HashMap<String, Challenge>>,
    submissions: RwLock<HashMap<Id, Submission>>,
    rewards: RwLock<HashMap<Id, Reward>>,
    users: RwLock<HashMap<Id, User>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the default challenge catalog.
    pub fn with_default_challenges() -> Self {
        let challenges: HashMap<String, Challenge> = default_challenges()
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();
        Self {
            challenges: RwLock::new(challenges),
            ..Self::default()
        }
    }

    /// Number of submissions currently stored.
    pub async fn submission_count(&self) -> usize {
        self.submissions.read().await.len()
    }

    /// Number of rewards currently stored.
    pub async fn reward_count(&self) -> usize {
        self.rewards.read().await.len()
    }
}

/// The two launch challenges, matching the production catalog.
fn default_challenges() -> Vec<Challenge> {
    let now = Utc::now();

    let room_tour_steps = vec![
        step(1, "Show us your bed area", "Pan around your sleeping space", "🛏️", 5),
        step(2, "Your study/work space", "Show your desk setup", "📚", 5),
        step(3, "Kitchen/food area", "Open the fridge, show cooking space", "🍕", 6),
        step(4, "Bathroom facilities", "Quick tour of your bathroom", "🚿", 4),
        step(5, "Your favorite spot", "Show us where you love to hang out", "🌟", 5),
    ];

    let day_in_life_steps = vec![
        step(1, "Morning routine", "Show us how you start your day", "🌅", 6),
        step(2, "Study session", "Capture yourself studying or in class", "📖", 5),
        step(3, "Meal time", "Show us what and where you eat", "🍽️", 5),
        step(4, "Social time", "Hanging out with friends or activities", "👥", 6),
        step(5, "Evening wind-down", "How you relax and end your day", "🌙", 5),
    ];

    vec![
        Challenge {
            id: "room-tour".to_string(),
            name: "Show Your Room in 5 Clips".to_string(),
            description:
                "Create awesome videos about your student housing experience and win amazing rewards!"
                    .to_string(),
            steps: room_tour_steps,
            points_per_step: 25,
            created_at: now,
        },
        Challenge {
            id: "day-in-life".to_string(),
            name: "Day in Life Challenge".to_string(),
            description: "Document a typical day in your student life with 5 engaging clips!"
                .to_string(),
            steps: day_in_life_steps,
            points_per_step: 25,
            created_at: now,
        },
    ]
}

fn step(id: i32, title: &str, description: &str, emoji: &str, duration: u32) -> ChallengeStep {
    ChallengeStep {
        id,
        title: title.to_string(),
        description: description.to_string(),
        emoji: emoji.to_string(),
        duration,
    }
}

#[async_trait]
impl Store for MemoryStore {
    // -- Challenges --

    async fn list_challenges(&self) -> StoreResult<Vec<Challenge>> {
        let challenges = self.challenges.read().await;
        let mut all: Vec<Challenge> = challenges.values().cloned().collect();
        // HashMap iteration order is arbitrary; keep the listing stable.
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn get_challenge(&self, id: &str) -> StoreResult<Option<Challenge>> {
        Ok(self.challenges.read().await.get(id).cloned())
    }

    async fn create_challenge(&self, input: CreateChallenge) -> StoreResult<Challenge> {
        let challenge = Challenge {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            steps: input.steps,
            points_per_step: input.points_per_step,
            created_at: Utc::now(),
        };
        self.challenges
            .write()
            .await
            .insert(challenge.id.clone(), challenge.clone());
        Ok(challenge)
    }

    // -- Submissions --

    async fn get_submission(&self, id: Id) -> StoreResult<Option<Submission>> {
        Ok(self.submissions.read().await.get(&id).cloned())
    }

    async fn create_submission(&self, input: CreateSubmission) -> StoreResult<Submission> {
        let submission = Submission {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            challenge_id: input.challenge_id,
            video_clips: input.video_clips,
            total_points: input.total_points,
            completed_at: Utc::now(),
        };
        self.submissions
            .write()
            .await
            .insert(submission.id, submission.clone());
        Ok(submission)
    }

    // -- Rewards --

    async fn create_reward(&self, input: CreateReward) -> StoreResult<Reward> {
        if self
            .get_submission(input.submission_id)
            .await?
            .is_none()
        {
            return Err(StoreError::NotFound {
                entity: "Submission",
                id: input.submission_id.to_string(),
            });
        }

        let mut rewards = self.rewards.write().await;
        if rewards
            .values()
            .any(|r| r.submission_id == input.submission_id)
        {
            return Err(StoreError::Conflict(format!(
                "Submission {} already has a reward",
                input.submission_id
            )));
        }

        let reward = Reward {
            id: Uuid::new_v4(),
            submission_id: input.submission_id,
            reward_type: input.reward_type,
            reward_value: input.reward_value,
            claimed: false,
            created_at: Utc::now(),
        };
        rewards.insert(reward.id, reward.clone());
        Ok(reward)
    }

    async fn reward_for_submission(&self, submission_id: Id) -> StoreResult<Option<Reward>> {
        Ok(self
            .rewards
            .read()
            .await
            .values()
            .find(|r| r.submission_id == submission_id)
            .cloned())
    }

    // -- Users --

    async fn get_user(&self, id: Id) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, input: CreateUser) -> StoreResult<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
        };
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
