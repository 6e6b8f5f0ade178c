//! Game tuning values, kept as configuration data rather than literals
//! inside the algorithms.
//!
//! The fusion penalty and the Kuudra tier table are game-specific numbers
//! with no derivation; they are carried here verbatim from the game data.
//! Tier 5 has a different base time than tiers 1-4 in the authoritative
//! data, and that asymmetry is preserved as-is.

use serde::{Deserialize, Serialize};

use crate::models::KuudraTier;

/// Shards whose rates never receive fortune modifiers.
pub const NO_FORTUNE_SHARDS: &[&str] = &["C19", "U4", "U16", "U28", "R25", "L4", "L15"];

/// Shards whose rates depend on wooden bait being enabled.
pub const WOODEN_BAIT_SHARDS: &[&str] = &["R29", "L23", "R59"];

/// The shard whose rate is derived from Kuudra runs when it has no direct
/// rate of its own.
pub const BOSS_REWARD_SHARD: &str = "L15";

/// The shard excluded from direct obtainment by the `exclude_chameleon`
/// parameter.
pub const CHAMELEON_SHARD: &str = "L4";

/// Rate multiplier applied to wooden-bait shards when wooden bait is
/// disabled.
pub const WOODEN_BAIT_PENALTY: f64 = 0.05;

/// Rate multiplier granted by an active frog pet.
pub const FROG_PET_MULTIPLIER: f64 = 1.1;

/// Black-hole tag table.
///
/// `Some(true)` marks a doubling-eligible shard: its rate gains the python
/// bonus and its effective fortune gains the king cobra bonus. `Some(false)`
/// grants the king cobra bonus only. `None` means the shard is untagged.
pub fn black_hole_tag(id: &str) -> Option<bool> {
    match id {
        "L26" | "E20" | "E17" | "E14" | "R56" | "R49" | "R21" | "R18" | "U30" | "U29" | "U27"
        | "C27" => Some(false),
        "E33" | "R39" | "R36" | "R31" | "R6" | "U38" | "U36" | "U33" | "U32" | "U18" | "U15"
        | "U12" | "C36" | "C33" | "C30" | "C21" | "C15" | "C12" | "C9" => Some(true),
        _ => None,
    }
}

/// Per-tier Kuudra run data: base run time in seconds, entry cost in coins,
/// and shard yield multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KuudraTierData {
    pub base_time: f64,
    pub cost: f64,
    pub multiplier: f64,
}

/// Kuudra tier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KuudraTable {
    pub t1: KuudraTierData,
    pub t2: KuudraTierData,
    pub t3: KuudraTierData,
    pub t4: KuudraTierData,
    pub t5: KuudraTierData,
}

impl KuudraTable {
    /// Tier data for the given tier; `None` for [`KuudraTier::None`].
    pub fn get(&self, tier: KuudraTier) -> Option<&KuudraTierData> {
        match tier {
            KuudraTier::None => None,
            KuudraTier::T1 => Some(&self.t1),
            KuudraTier::T2 => Some(&self.t2),
            KuudraTier::T3 => Some(&self.t3),
            KuudraTier::T4 => Some(&self.t4),
            KuudraTier::T5 => Some(&self.t5),
        }
    }
}

impl Default for KuudraTable {
    fn default() -> Self {
        KuudraTable {
            t1: KuudraTierData { base_time: 135.0, cost: 155_000.0, multiplier: 1.0 },
            t2: KuudraTierData { base_time: 135.0, cost: 310_000.0, multiplier: 1.0 },
            t3: KuudraTierData { base_time: 135.0, cost: 582_000.0, multiplier: 2.0 },
            t4: KuudraTierData { base_time: 135.0, cost: 1_164_000.0, multiplier: 2.0 },
            t5: KuudraTierData { base_time: 165.0, cost: 2_328_000.0, multiplier: 3.0 },
        }
    }
}

/// Numeric tuning values consumed by the solver and the rate resolver.
///
/// Deserializable so deployments can override the defaults from
/// configuration without a rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fixed duration of one fusion action, in hours.
    pub craft_penalty_hours: f64,
    /// Kuudra tier table for the boss-reward shard's derived rate.
    pub kuudra: KuudraTable,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            // One fusion action takes 0.8 seconds.
            craft_penalty_hours: 0.8 / 3600.0,
            kuudra: KuudraTable::default(),
        }
    }
}
