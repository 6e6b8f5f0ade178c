//! Effective direct-rate resolution.
//!
//! Turns the raw catalog documents plus the user's calculation parameters
//! into a [`Catalog`] whose shards carry their effective shards/hour rate.
//! The modifier pipeline, in order: custom override or catalog default,
//! Kuudra-derived rate for the boss-reward shard, wooden-bait penalty,
//! fortune modifiers, chameleon exclusion.

use std::collections::HashMap;

use crate::models::{
    CalculationParams, Catalog, FusionDocument, KuudraTier, Rarity, Recipe, Recipes, Shard,
    ShardDefinition, Shards,
};
use crate::tuning::{
    black_hole_tag, Tuning, BOSS_REWARD_SHARD, CHAMELEON_SHARD, FROG_PET_MULTIPLIER,
    NO_FORTUNE_SHARDS, WOODEN_BAIT_PENALTY, WOODEN_BAIT_SHARDS,
};

/// Builds the resolved catalog for one computation.
///
/// Every shard in the fusion document appears in the output with its
/// effective rate; unresolvable rates default to 0 ("not directly
/// obtainable") rather than erroring. Recipes referencing ids absent from
/// the shard table are dropped here so the solver never sees them.
pub fn resolve_catalog(
    fusion: &FusionDocument,
    default_rates: &HashMap<String, f64>,
    params: &CalculationParams,
    tuning: &Tuning,
) -> Catalog {
    let mut shards = Shards::with_capacity(fusion.shards.len());
    for (id, def) in &fusion.shards {
        let base = params
            .custom_rates
            .get(id)
            .copied()
            .or_else(|| default_rates.get(id).copied())
            .unwrap_or(0.0);
        let rate = resolve_rate(id, def, base, params, tuning);
        shards.insert(
            id.clone(),
            Shard {
                id: id.clone(),
                name: def.name.clone(),
                family: def.family.clone(),
                shard_type: def.shard_type.clone(),
                rarity: def.rarity,
                fuse_amount: def.fuse_amount,
                internal_id: def.internal_id.clone(),
                rate,
            },
        );
    }

    let recipes = flatten_recipes(&fusion.recipes, &shards);
    Catalog { shards, recipes }
}

/// Applies the full modifier pipeline to one shard's base rate.
pub fn resolve_rate(
    id: &str,
    def: &ShardDefinition,
    base_rate: f64,
    params: &CalculationParams,
    tuning: &Tuning,
) -> f64 {
    let mut rate = base_rate;

    // The boss-reward shard has no catalog rate; derive one from Kuudra runs.
    if id == BOSS_REWARD_SHARD && rate == 0.0 {
        rate = kuudra_rate(params.kuudra_tier, params.money_per_hour, tuning);
    }

    if rate > 0.0 {
        if params.no_wooden_bait && WOODEN_BAIT_SHARDS.contains(&id) {
            rate *= WOODEN_BAIT_PENALTY;
        }

        if !NO_FORTUNE_SHARDS.contains(&id) {
            rate = apply_fortune_modifiers(rate, id, def.rarity, params);
        }
    }

    // Exclusion wins over everything above.
    if params.exclude_chameleon && id == CHAMELEON_SHARD {
        rate = 0.0;
    }

    rate
}

/// Rate derived from Kuudra runs: yield multiplier over the run time plus
/// the time needed to earn the entry cost.
pub fn kuudra_rate(tier: KuudraTier, money_per_hour: f64, tuning: &Tuning) -> f64 {
    let Some(data) = tuning.kuudra.get(tier) else {
        return 0.0;
    };
    let cost_time = if money_per_hour == 0.0 {
        0.0
    } else {
        data.cost / money_per_hour * 3600.0
    };
    data.multiplier * 3600.0 / (data.base_time + cost_time)
}

/// Applies fortune and pet modifiers to a positive rate.
///
/// Effective fortune is hunter fortune plus a rarity-specific pet bonus
/// (legendary shards get none). The tiamat, sea serpent, python, and king
/// cobra bonuses chain multiplicatively in that order; python and king
/// cobra only apply to black-hole tagged shards.
pub fn apply_fortune_modifiers(
    mut rate: f64,
    id: &str,
    rarity: Rarity,
    params: &CalculationParams,
) -> f64 {
    let mut effective_fortune = params.hunter_fortune;

    let tiamat = 1.0 + 0.05 * f64::from(params.tiamat_level);
    let sea_serpent = 1.0 + 0.02 * f64::from(params.sea_serpent_level) * tiamat;
    let python = 0.02 * f64::from(params.python_level) * sea_serpent;
    let king_cobra = f64::from(params.king_cobra_level) / 100.0 * sea_serpent;

    effective_fortune += match rarity {
        Rarity::Common => 2.0 * f64::from(params.newt_level),
        Rarity::Uncommon => 2.0 * f64::from(params.salamander_level),
        Rarity::Rare => f64::from(params.lizard_king_level),
        Rarity::Epic => f64::from(params.leviathan_level),
        Rarity::Legendary => 0.0,
    };

    if params.frog_pet {
        rate *= FROG_PET_MULTIPLIER;
    }

    if let Some(doubling) = black_hole_tag(id) {
        if doubling {
            rate *= 1.0 + python;
        }
        effective_fortune *= 1.0 + king_cobra;
    }

    rate * (1.0 + effective_fortune / 100.0)
}

/// Flattens the quantity-keyed recipe map of the fusion document into a
/// per-output candidate list.
///
/// Entries with a non-numeric or zero output quantity, or referencing shard
/// ids absent from the catalog, are dropped.
pub fn flatten_recipes(
    raw: &HashMap<String, HashMap<String, Vec<[String; 2]>>>,
    shards: &Shards,
) -> Recipes {
    let mut recipes = Recipes::new();
    for (output, by_quantity) in raw {
        if !shards.contains_key(output) {
            continue;
        }
        let candidates = recipes.entry(output.clone()).or_insert_with(Vec::new);
        for (quantity_str, pairs) in by_quantity {
            let Ok(output_quantity) = quantity_str.parse::<u32>() else {
                continue;
            };
            if output_quantity == 0 {
                continue;
            }
            for pair in pairs {
                if pair.iter().all(|input| shards.contains_key(input)) {
                    candidates.push(Recipe {
                        inputs: pair.clone(),
                        output_quantity,
                    });
                }
            }
        }
    }
    recipes.retain(|_, candidates| !candidates.is_empty());
    recipes
}
