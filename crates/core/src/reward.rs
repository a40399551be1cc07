//! Weighted reward selection.
//!
//! One reward is drawn per completed submission from a fixed catalog of
//! `(kind, value, weight)` entries. Draws are independent and stateless:
//! the empirical frequency of entry *i* converges to
//! `weight(i) / total_weight` over many submissions.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A single prize option in the reward catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardEntry {
    /// Reward category (`"gift-card"`, `"voucher"`, `"cash"`, ...).
    pub kind: &'static str,
    /// Display value shown to the user.
    pub value: &'static str,
    /// Relative draw weight. Must be positive.
    pub weight: u32,
}

/// The production reward catalog. Weights sum to 100, split into rarity
/// tiers: common 70%, rare 25%, epic 5%.
pub const DEFAULT_CATALOG: &[RewardEntry] = &[
    // Common rewards.
    RewardEntry {
        kind: "gift-card",
        value: "£3 Costa Coffee",
        weight: 15,
    },
    RewardEntry {
        kind: "voucher",
        value: "£5 Subway Voucher",
        weight: 15,
    },
    RewardEntry {
        kind: "credit",
        value: "£5 Amazon Credit",
        weight: 15,
    },
    RewardEntry {
        kind: "voucher",
        value: "Free McDonald's Meal",
        weight: 10,
    },
    RewardEntry {
        kind: "gift-card",
        value: "£4 Greggs Card",
        weight: 10,
    },
    RewardEntry {
        kind: "bundle",
        value: "Study Snacks Box",
        weight: 5,
    },
    // Rare rewards.
    RewardEntry {
        kind: "subscription",
        value: "Spotify Premium (3 Months)",
        weight: 8,
    },
    RewardEntry {
        kind: "voucher",
        value: "£15 Domino's Voucher",
        weight: 7,
    },
    RewardEntry {
        kind: "subscription",
        value: "Netflix (1 Month)",
        weight: 5,
    },
    RewardEntry {
        kind: "credit",
        value: "£20 Amazon Voucher",
        weight: 5,
    },
    // Epic rewards.
    RewardEntry {
        kind: "cash",
        value: "£50 PayPal Cash",
        weight: 2,
    },
    RewardEntry {
        kind: "voucher",
        value: "£100 ASOS Voucher",
        weight: 2,
    },
    RewardEntry {
        kind: "mystery",
        value: "Epic Student Bundle",
        weight: 1,
    },
];

/// Sum of all weights in a catalog.
pub fn total_weight(catalog: &[RewardEntry]) -> u64 {
    catalog.iter().map(|e| u64::from(e.weight)).sum()
}

/// Validate a reward catalog: non-empty, every weight positive.
pub fn validate_catalog(catalog: &[RewardEntry]) -> Result<(), CoreError> {
    if catalog.is_empty() {
        return Err(CoreError::Validation(
            "Reward catalog must not be empty".to_string(),
        ));
    }
    for entry in catalog {
        if entry.weight == 0 {
            return Err(CoreError::Validation(format!(
                "Reward '{}' has zero weight; all weights must be positive",
                entry.value
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Draw
// ---------------------------------------------------------------------------

/// Walk the catalog subtracting weights from `offset` and return the first
/// entry at which the remainder reaches zero.
///
/// With `offset` drawn uniformly from `[0, total_weight)` the loop always
/// selects an entry; the trailing fallback to the first entry is an
/// invariant-violation guard, not a normal path.
fn select_by_offset(catalog: &[RewardEntry], mut offset: f64) -> &RewardEntry {
    for entry in catalog {
        offset -= f64::from(entry.weight);
        if offset <= 0.0 {
            return entry;
        }
    }
    &catalog[0]
}

/// Draw one reward from `catalog` using the given random source.
///
/// The catalog must be non-empty with positive weights (see
/// [`validate_catalog`]); every call returns exactly one of its entries.
pub fn draw<'a>(catalog: &'a [RewardEntry], rng: &mut impl Rng) -> &'a RewardEntry {
    let total = total_weight(catalog) as f64;
    select_by_offset(catalog, rng.random_range(0.0..total))
}

// ---------------------------------------------------------------------------
// RewardDrawer
// ---------------------------------------------------------------------------

/// Draw capability bundling a validated catalog with a seedable random
/// source, shareable across request handlers.
///
/// Production uses [`RewardDrawer::new`] (OS entropy); tests use
/// [`RewardDrawer::with_seed`] for deterministic draws.
pub struct RewardDrawer {
    catalog: Vec<RewardEntry>,
    rng: Mutex<StdRng>,
}

impl RewardDrawer {
    /// Build a drawer over `catalog` seeded from OS entropy.
    pub fn new(catalog: Vec<RewardEntry>) -> Result<Self, CoreError> {
        validate_catalog(&catalog)?;
        Ok(Self {
            catalog,
            rng: Mutex::new(StdRng::from_os_rng()),
        })
    }

    /// Build a drawer with a fixed seed for reproducible draws.
    pub fn with_seed(catalog: Vec<RewardEntry>, seed: u64) -> Result<Self, CoreError> {
        validate_catalog(&catalog)?;
        Ok(Self {
            catalog,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        })
    }

    /// The catalog this drawer selects from.
    pub fn catalog(&self) -> &[RewardEntry] {
        &self.catalog
    }

    /// Perform one independent weighted draw.
    pub fn draw(&self) -> RewardEntry {
        let mut rng = self.rng.lock().expect("reward rng mutex poisoned");
        *draw(&self.catalog, &mut *rng)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
