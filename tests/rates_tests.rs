//! Tests for effective direct-rate resolution.

use std::collections::HashMap;

use shardforge::models::{
    CalculationParams, FusionDocument, KuudraTier, Rarity, ShardDefinition,
};
use shardforge::rates::{flatten_recipes, kuudra_rate, resolve_catalog};
use shardforge::tuning::Tuning;

fn definition(name: &str, rarity: Rarity) -> ShardDefinition {
    ShardDefinition {
        name: name.to_string(),
        family: "Test".to_string(),
        shard_type: "Test".to_string(),
        rarity,
        fuse_amount: 2,
        internal_id: format!("SHARD_{}", name.to_uppercase()),
    }
}

fn document(shards: Vec<(&str, ShardDefinition)>) -> FusionDocument {
    FusionDocument {
        shards: shards
            .into_iter()
            .map(|(id, def)| (id.to_string(), def))
            .collect(),
        recipes: HashMap::new(),
    }
}

fn rates(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries
        .iter()
        .map(|(id, rate)| (id.to_string(), *rate))
        .collect()
}

fn resolve_one(
    doc: &FusionDocument,
    defaults: &HashMap<String, f64>,
    params: &CalculationParams,
    id: &str,
) -> f64 {
    let catalog = resolve_catalog(doc, defaults, params, &Tuning::default());
    catalog.shards[id].rate
}

#[test]
fn test_default_rate_used_when_no_override() {
    let doc = document(vec![("C9", definition("Gecko", Rarity::Common))]);
    let defaults = rates(&[("C9", 12.0)]);
    let rate = resolve_one(&doc, &defaults, &CalculationParams::default(), "C9");
    assert_eq!(rate, 12.0);
}

#[test]
fn test_custom_rate_overrides_default() {
    let doc = document(vec![("C9", definition("Gecko", Rarity::Common))]);
    let defaults = rates(&[("C9", 12.0)]);
    let mut params = CalculationParams::default();
    params.custom_rates.insert("C9".to_string(), 100.0);

    assert_eq!(resolve_one(&doc, &defaults, &params, "C9"), 100.0);
}

#[test]
fn test_missing_rate_defaults_to_zero() {
    let doc = document(vec![("R25", definition("Basilisk", Rarity::Rare))]);
    let rate = resolve_one(&doc, &rates(&[]), &CalculationParams::default(), "R25");
    assert_eq!(rate, 0.0);
}

#[test]
fn test_kuudra_tier_none_yields_zero() {
    // No tier means no derived rate, regardless of money per hour.
    let tuning = Tuning::default();
    assert_eq!(kuudra_rate(KuudraTier::None, 0.0, &tuning), 0.0);
    assert_eq!(kuudra_rate(KuudraTier::None, 10_000_000.0, &tuning), 0.0);
}

#[test]
fn test_kuudra_rate_without_money_ignores_cost() {
    let tuning = Tuning::default();
    // t1: 1 * 3600 / 135
    assert!((kuudra_rate(KuudraTier::T1, 0.0, &tuning) - 3600.0 / 135.0).abs() < 1e-9);
    // t5 has a different base time: 3 * 3600 / 165
    assert!((kuudra_rate(KuudraTier::T5, 0.0, &tuning) - 3.0 * 3600.0 / 165.0).abs() < 1e-9);
}

#[test]
fn test_kuudra_rate_prices_entry_cost_as_time() {
    let tuning = Tuning::default();
    // Earning 155k/hour makes the t1 entry cost worth exactly one hour.
    let rate = kuudra_rate(KuudraTier::T1, 155_000.0, &tuning);
    assert!((rate - 3600.0 / (135.0 + 3600.0)).abs() < 1e-9);
}

#[test]
fn test_boss_reward_shard_gets_kuudra_rate_when_zero() {
    let doc = document(vec![("L15", definition("Burningsoul", Rarity::Legendary))]);
    let mut params = CalculationParams::default();
    params.kuudra_tier = KuudraTier::T3;

    let rate = resolve_one(&doc, &rates(&[]), &params, "L15");
    assert!((rate - 2.0 * 3600.0 / 135.0).abs() < 1e-9);
}

#[test]
fn test_boss_reward_shard_keeps_explicit_rate() {
    // A nonzero rate wins over the Kuudra derivation.
    let doc = document(vec![("L15", definition("Burningsoul", Rarity::Legendary))]);
    let mut params = CalculationParams::default();
    params.kuudra_tier = KuudraTier::T3;
    params.custom_rates.insert("L15".to_string(), 5.0);

    assert_eq!(resolve_one(&doc, &rates(&[]), &params, "L15"), 5.0);
}

#[test]
fn test_wooden_bait_penalty() {
    let doc = document(vec![("R29", definition("Silverfin", Rarity::Rare))]);
    let defaults = rates(&[("R29", 4.0)]);
    let mut params = CalculationParams::default();
    params.no_wooden_bait = true;

    let rate = resolve_one(&doc, &defaults, &params, "R29");
    assert!((rate - 0.2).abs() < 1e-12);
}

#[test]
fn test_chameleon_exclusion_wins_over_custom_rate() {
    let doc = document(vec![("L4", definition("Chameleon", Rarity::Legendary))]);
    let mut params = CalculationParams::default();
    params.exclude_chameleon = true;
    params.custom_rates.insert("L4".to_string(), 50.0);

    assert_eq!(resolve_one(&doc, &rates(&[]), &params, "L4"), 0.0);
}

#[test]
fn test_fortune_exempt_shard_unmodified() {
    // C19 is on the fortune-exempt list.
    let doc = document(vec![("C19", definition("Mudworm", Rarity::Common))]);
    let defaults = rates(&[("C19", 8.0)]);
    let mut params = CalculationParams::default();
    params.hunter_fortune = 100.0;
    params.newt_level = 10;

    assert_eq!(resolve_one(&doc, &defaults, &params, "C19"), 8.0);
}

#[test]
fn test_hunter_fortune_with_rarity_pet_bonus() {
    // Common rarity draws on the newt pet: fortune 20 + 2*5 = 30.
    // C1 carries no black-hole tag.
    let doc = document(vec![("C1", definition("Fieldmouse", Rarity::Common))]);
    let defaults = rates(&[("C1", 10.0)]);
    let mut params = CalculationParams::default();
    params.hunter_fortune = 20.0;
    params.newt_level = 5;

    let rate = resolve_one(&doc, &defaults, &params, "C1");
    assert!((rate - 13.0).abs() < 1e-12);
}

#[test]
fn test_legendary_gets_no_rarity_pet_bonus() {
    let doc = document(vec![("L23", definition("Megalodon", Rarity::Legendary))]);
    let defaults = rates(&[("L23", 0.5)]);
    let mut params = CalculationParams::default();
    params.newt_level = 10;
    params.salamander_level = 10;
    params.lizard_king_level = 10;
    params.leviathan_level = 10;

    assert_eq!(resolve_one(&doc, &defaults, &params, "L23"), 0.5);
}

#[test]
fn test_frog_pet_bonus() {
    let doc = document(vec![("C1", definition("Fieldmouse", Rarity::Common))]);
    let defaults = rates(&[("C1", 10.0)]);
    let mut params = CalculationParams::default();
    params.frog_pet = true;

    let rate = resolve_one(&doc, &defaults, &params, "C1");
    assert!((rate - 11.0).abs() < 1e-12);
}

#[test]
fn test_black_hole_doubling_shard() {
    // C9 is doubling-eligible. With all four chain pets at level 10:
    // tiamat 1.5, sea serpent 1.3, python 0.26, king cobra 0.13.
    // rate: 10 * 1.26 = 12.6; fortune: 100 * 1.13 = 113; final 12.6 * 2.13.
    let doc = document(vec![("C9", definition("Gecko", Rarity::Common))]);
    let defaults = rates(&[("C9", 10.0)]);
    let mut params = CalculationParams::default();
    params.hunter_fortune = 100.0;
    params.tiamat_level = 10;
    params.sea_serpent_level = 10;
    params.python_level = 10;
    params.king_cobra_level = 10;

    let rate = resolve_one(&doc, &defaults, &params, "C9");
    assert!((rate - 12.6 * 2.13).abs() < 1e-9);
}

#[test]
fn test_black_hole_non_doubling_shard() {
    // E14 is tagged but not doubling-eligible: no python rate bonus, but
    // the king cobra fortune bonus still applies.
    let doc = document(vec![("E14", definition("Kraken", Rarity::Epic))]);
    let defaults = rates(&[("E14", 10.0)]);
    let mut params = CalculationParams::default();
    params.hunter_fortune = 100.0;
    params.tiamat_level = 10;
    params.sea_serpent_level = 10;
    params.python_level = 10;
    params.king_cobra_level = 10;

    let rate = resolve_one(&doc, &defaults, &params, "E14");
    assert!((rate - 10.0 * 2.13).abs() < 1e-9);
}

#[test]
fn test_zero_rate_receives_no_modifiers() {
    // Fortune and pets cannot conjure a rate out of nothing.
    let doc = document(vec![("C1", definition("Fieldmouse", Rarity::Common))]);
    let mut params = CalculationParams::default();
    params.hunter_fortune = 500.0;
    params.frog_pet = true;

    assert_eq!(resolve_one(&doc, &rates(&[]), &params, "C1"), 0.0);
}

#[test]
fn test_flatten_recipes_expands_quantity_groups() {
    let mut doc = document(vec![
        ("A", definition("Alpha", Rarity::Common)),
        ("B", definition("Beta", Rarity::Common)),
        ("Y", definition("Gamma", Rarity::Rare)),
    ]);
    doc.recipes.insert(
        "Y".to_string(),
        HashMap::from([
            ("1".to_string(), vec![["A".to_string(), "B".to_string()]]),
            ("2".to_string(), vec![["A".to_string(), "A".to_string()]]),
        ]),
    );

    let catalog = resolve_catalog(&doc, &rates(&[]), &CalculationParams::default(), &Tuning::default());
    let candidates = &catalog.recipes["Y"];

    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().any(|r| r.output_quantity == 1));
    assert!(candidates.iter().any(|r| r.output_quantity == 2));
}

#[test]
fn test_flatten_recipes_drops_unknown_ids_and_zero_quantity() {
    let doc = document(vec![
        ("A", definition("Alpha", Rarity::Common)),
        ("Y", definition("Gamma", Rarity::Rare)),
    ]);
    let raw = HashMap::from([
        // Unknown input shard.
        (
            "Y".to_string(),
            HashMap::from([
                ("1".to_string(), vec![["A".to_string(), "MISSING".to_string()]]),
                ("0".to_string(), vec![["A".to_string(), "A".to_string()]]),
            ]),
        ),
        // Unknown output shard.
        (
            "MISSING".to_string(),
            HashMap::from([("1".to_string(), vec![["A".to_string(), "A".to_string()]])]),
        ),
    ]);

    let catalog = resolve_catalog(&doc, &rates(&[]), &CalculationParams::default(), &Tuning::default());
    let recipes = flatten_recipes(&raw, &catalog.shards);
    assert!(recipes.is_empty());
}
