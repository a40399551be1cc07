//! Handlers for the `/rewards` resource.

use axum::Json;
use serde::Serialize;

// ---------------------------------------------------------------------------
// GET /rewards/preview
// ---------------------------------------------------------------------------

/// A teaser entry shown on the homepage before any submission.
#[derive(Debug, Clone, Serialize)]
pub struct RewardPreview {
    pub icon: &'static str,
    pub name: &'static str,
    pub rarity: &'static str,
}

/// Static preview of what the reward wheel can pay out. Display-only; the
/// actual draw uses the weighted catalog in `roomreel_core::reward`.
const PREVIEWS: &[RewardPreview] = &[
    RewardPreview {
        icon: "☕",
        name: "Costa Cards",
        rarity: "common",
    },
    RewardPreview {
        icon: "🎵",
        name: "Spotify Premium",
        rarity: "rare",
    },
    RewardPreview {
        icon: "🍕",
        name: "Food Vouchers",
        rarity: "common",
    },
    RewardPreview {
        icon: "💰",
        name: "PayPal Cash",
        rarity: "epic",
    },
    RewardPreview {
        icon: "🛍️",
        name: "ASOS Vouchers",
        rarity: "epic",
    },
    RewardPreview {
        icon: "🎮",
        name: "Gaming Credit",
        rarity: "rare",
    },
];

/// Reward previews for the homepage.
pub async fn preview() -> Json<Vec<RewardPreview>> {
    Json(PREVIEWS.to_vec())
}
