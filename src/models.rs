//! Data models and structures for Shardforge.
//!
//! This module contains all the core data structures used throughout the
//! application, including shards, fusion recipes, recipe trees, calculation
//! parameters, and calculation results.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum level for any fusion-related pet.
pub const MAX_PET_LEVEL: u32 = 10;

/// Shard rarity tier.
///
/// Rarity determines which pet contributes a fortune bonus and the maximum
/// quantity a caller would sensibly request in one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Maximum quantity of a shard of this rarity a player can hold.
    pub fn max_quantity(self) -> u64 {
        match self {
            Rarity::Common => 96,
            Rarity::Uncommon => 64,
            Rarity::Rare => 48,
            Rarity::Epic => 32,
            Rarity::Legendary => 24,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        };
        f.write_str(name)
    }
}

/// A shard with its effective direct-obtain rate resolved for one
/// computation.
///
/// `rate` is in shards/hour; 0 means the shard cannot be obtained directly
/// and must be fused (if a recipe exists at all).
#[derive(Debug, Clone, Serialize)]
pub struct Shard {
    /// Catalog id (e.g. "R25")
    pub id: String,
    /// Display name
    pub name: String,
    /// Shard family (e.g. "Reptile")
    pub family: String,
    /// Shard type classification
    #[serde(rename = "type")]
    pub shard_type: String,
    /// Rarity tier
    pub rarity: Rarity,
    /// Units of this shard consumed per fusion input slot
    pub fuse_amount: u32,
    /// Game-internal identifier
    pub internal_id: String,
    /// Effective direct rate in shards/hour (0 = not directly obtainable)
    pub rate: f64,
}

/// A single fusion recipe: two input shards produce `output_quantity` units
/// of the output shard per fusion action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Input shard ids, one per fusion slot
    pub inputs: [String; 2],
    /// Units of the output shard produced per fusion action
    #[serde(rename = "outputQuantity")]
    pub output_quantity: u32,
}

/// Shard table keyed by shard id.
pub type Shards = HashMap<String, Shard>;

/// Candidate recipes keyed by output shard id.
pub type Recipes = HashMap<String, Vec<Recipe>>;

/// Fully-resolved catalog for one computation: every shard with its
/// effective rate, plus the recipe hypergraph.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub shards: Shards,
    pub recipes: Recipes,
}

/// A node in the expanded production tree for one target shard.
///
/// `quantity` is zero until [`assign_quantities`] has run over the tree.
///
/// [`assign_quantities`]: crate::optimizer::assign_quantities
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum RecipeTree {
    /// The shard is gathered directly at its resolved rate.
    Direct { shard: String, quantity: u64 },
    /// The shard is produced by fusing the two input subtrees.
    Recipe {
        shard: String,
        quantity: u64,
        recipe: Recipe,
        inputs: Box<[RecipeTree; 2]>,
    },
}

impl RecipeTree {
    /// The shard id this node produces.
    pub fn shard(&self) -> &str {
        match self {
            RecipeTree::Direct { shard, .. } | RecipeTree::Recipe { shard, .. } => shard,
        }
    }

    /// Units of this shard required at this position in the tree.
    pub fn quantity(&self) -> u64 {
        match self {
            RecipeTree::Direct { quantity, .. } | RecipeTree::Recipe { quantity, .. } => *quantity,
        }
    }

    /// True for leaves that are gathered directly.
    pub fn is_direct(&self) -> bool {
        matches!(self, RecipeTree::Direct { .. })
    }
}

/// Kuudra boss-encounter difficulty tier.
///
/// Affects the derived rate of the boss-reward shard when it has no direct
/// rate of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KuudraTier {
    #[default]
    None,
    T1,
    T2,
    T3,
    T4,
    T5,
}

/// User-configurable inputs for one calculation.
///
/// Immutable for the duration of a computation; the engine never mutates
/// these. Field names follow the wire format used by web callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculationParams {
    /// Per-shard rate overrides, taking precedence over catalog defaults
    pub custom_rates: HashMap<String, f64>,
    /// Hunter fortune stat (>= 0)
    pub hunter_fortune: f64,
    /// Force the chameleon shard's rate to zero
    pub exclude_chameleon: bool,
    /// Frog pet active (flat 10% rate bonus)
    pub frog_pet: bool,
    pub newt_level: u32,
    pub salamander_level: u32,
    pub lizard_king_level: u32,
    pub leviathan_level: u32,
    pub python_level: u32,
    pub king_cobra_level: u32,
    pub sea_serpent_level: u32,
    pub tiamat_level: u32,
    pub kuudra_tier: KuudraTier,
    /// Money earned per hour, used to price Kuudra entry costs as time
    pub money_per_hour: f64,
    /// Wooden bait disabled (heavy penalty for bait-dependent shards)
    pub no_wooden_bait: bool,
}

impl Default for CalculationParams {
    fn default() -> Self {
        CalculationParams {
            custom_rates: HashMap::new(),
            hunter_fortune: 0.0,
            exclude_chameleon: false,
            frog_pet: false,
            newt_level: 0,
            salamander_level: 0,
            lizard_king_level: 0,
            leviathan_level: 0,
            python_level: 0,
            king_cobra_level: 0,
            sea_serpent_level: 0,
            tiamat_level: 0,
            kuudra_tier: KuudraTier::None,
            money_per_hour: 0.0,
            no_wooden_bait: false,
        }
    }
}

/// Validation error for out-of-range calculation parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{pet} pet level must be 0-{max}, got {level}", max = MAX_PET_LEVEL)]
    PetLevel { pet: &'static str, level: u32 },
    #[error("custom rate for {shard} must be a non-negative number, got {rate}")]
    CustomRate { shard: String, rate: f64 },
}

impl CalculationParams {
    /// Checks the ranges recognized at the form boundary: fortune and
    /// money/hour non-negative, pet levels 0-10, custom rates finite and
    /// non-negative.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.hunter_fortune < 0.0 {
            return Err(ParamsError::Negative {
                field: "hunter fortune",
                value: self.hunter_fortune,
            });
        }
        if self.money_per_hour < 0.0 {
            return Err(ParamsError::Negative {
                field: "money per hour",
                value: self.money_per_hour,
            });
        }

        let pets = [
            ("newt", self.newt_level),
            ("salamander", self.salamander_level),
            ("lizard king", self.lizard_king_level),
            ("leviathan", self.leviathan_level),
            ("python", self.python_level),
            ("king cobra", self.king_cobra_level),
            ("sea serpent", self.sea_serpent_level),
            ("tiamat", self.tiamat_level),
        ];
        for (pet, level) in pets {
            if level > MAX_PET_LEVEL {
                return Err(ParamsError::PetLevel { pet, level });
            }
        }

        for (shard, &rate) in &self.custom_rates {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ParamsError::CustomRate {
                    shard: shard.clone(),
                    rate,
                });
            }
        }

        Ok(())
    }
}

/// Result of one optimal-path calculation.
///
/// All time values are in decimal hours. `total_time` may be infinite when
/// no finite production path to the target exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Minimum time-cost to obtain one unit of the target
    pub time_per_shard: f64,
    /// Time to obtain everything actually produced
    pub total_time: f64,
    /// Units actually produced; may exceed the request because fusions
    /// yield whole output multiples
    pub total_shards_produced: u64,
    /// Fusion actions needed at the root (1 for a direct-only target)
    pub crafts_needed: u64,
    /// Raw shard quantities to gather directly, keyed by shard id
    pub total_quantities: HashMap<String, u64>,
    /// Fusion actions across the whole tree
    pub total_fusions: u64,
    /// Time spent performing fusion actions
    pub craft_time: f64,
    /// Quantity-annotated production tree
    pub tree: RecipeTree,
}

impl CalculationResult {
    /// Zero-valued result for a target absent from the catalog.
    ///
    /// Returned instead of an error so callers can render "no result"
    /// without exception handling.
    pub fn empty(target: &str) -> Self {
        CalculationResult {
            time_per_shard: 0.0,
            total_time: 0.0,
            total_shards_produced: 0,
            crafts_needed: 0,
            total_quantities: HashMap::new(),
            total_fusions: 0,
            craft_time: 0.0,
            tree: RecipeTree::Direct {
                shard: target.to_string(),
                quantity: 0,
            },
        }
    }
}

// ============================================================================
// JSON Document Structures
// ============================================================================

/// Shard entry as it appears in `fusion-data.json`, before rate resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct ShardDefinition {
    pub name: String,
    pub family: String,
    #[serde(rename = "type")]
    pub shard_type: String,
    pub rarity: Rarity,
    pub fuse_amount: u32,
    pub internal_id: String,
}

/// The `fusion-data.json` document: shard catalog plus the raw recipe map.
///
/// Recipes are keyed by output shard id, then by output quantity (as a
/// string), each entry listing input pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct FusionDocument {
    pub shards: HashMap<String, ShardDefinition>,
    #[serde(default)]
    pub recipes: HashMap<String, HashMap<String, Vec<[String; 2]>>>,
}
