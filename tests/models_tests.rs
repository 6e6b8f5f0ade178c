//! Tests for data models and structures.

use shardforge::models::{
    CalculationParams, KuudraTier, ParamsError, Rarity, Recipe, RecipeTree,
};

#[test]
fn test_default_params_are_neutral() {
    let params = CalculationParams::default();

    assert!(params.custom_rates.is_empty());
    assert_eq!(params.hunter_fortune, 0.0);
    assert!(!params.exclude_chameleon);
    assert!(!params.frog_pet);
    assert!(!params.no_wooden_bait);
    assert_eq!(params.kuudra_tier, KuudraTier::None);
    assert_eq!(params.money_per_hour, 0.0);
    assert_eq!(params.newt_level, 0);
    assert_eq!(params.tiamat_level, 0);
}

#[test]
fn test_default_params_validate() {
    assert!(CalculationParams::default().validate().is_ok());
}

#[test]
fn test_validate_rejects_pet_level_above_ten() {
    let mut params = CalculationParams::default();
    params.python_level = 11;

    match params.validate() {
        Err(ParamsError::PetLevel { pet, level }) => {
            assert_eq!(pet, "python");
            assert_eq!(level, 11);
        }
        other => panic!("Expected PetLevel error, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_negative_fortune() {
    let mut params = CalculationParams::default();
    params.hunter_fortune = -1.0;
    assert!(matches!(
        params.validate(),
        Err(ParamsError::Negative { field: "hunter fortune", .. })
    ));
}

#[test]
fn test_validate_rejects_bad_custom_rate() {
    let mut params = CalculationParams::default();
    params.custom_rates.insert("C9".to_string(), -3.0);
    assert!(matches!(params.validate(), Err(ParamsError::CustomRate { .. })));

    let mut params = CalculationParams::default();
    params.custom_rates.insert("C9".to_string(), f64::NAN);
    assert!(matches!(params.validate(), Err(ParamsError::CustomRate { .. })));
}

#[test]
fn test_params_deserialize_from_camel_case_with_defaults() {
    let params: CalculationParams = serde_json::from_str(
        r#"{"hunterFortune": 42.0, "kuudraTier": "t3", "noWoodenBait": true}"#,
    )
    .expect("Should deserialize");

    assert_eq!(params.hunter_fortune, 42.0);
    assert_eq!(params.kuudra_tier, KuudraTier::T3);
    assert!(params.no_wooden_bait);
    // Everything omitted falls back to the default.
    assert_eq!(params.newt_level, 0);
    assert!(!params.frog_pet);
}

#[test]
fn test_rarity_parses_lowercase_and_rejects_unknown() {
    let rarity: Rarity = serde_json::from_str(r#""epic""#).expect("Should parse");
    assert_eq!(rarity, Rarity::Epic);

    assert!(serde_json::from_str::<Rarity>(r#""mythic""#).is_err());
    assert!(serde_json::from_str::<Rarity>(r#""Epic""#).is_err());
}

#[test]
fn test_rarity_max_quantity() {
    assert_eq!(Rarity::Common.max_quantity(), 96);
    assert_eq!(Rarity::Uncommon.max_quantity(), 64);
    assert_eq!(Rarity::Rare.max_quantity(), 48);
    assert_eq!(Rarity::Epic.max_quantity(), 32);
    assert_eq!(Rarity::Legendary.max_quantity(), 24);
}

#[test]
fn test_recipe_wire_format() {
    let recipe: Recipe =
        serde_json::from_str(r#"{"inputs": ["A", "B"], "outputQuantity": 2}"#)
            .expect("Should deserialize");
    assert_eq!(recipe.inputs, ["A".to_string(), "B".to_string()]);
    assert_eq!(recipe.output_quantity, 2);
}

#[test]
fn test_recipe_tree_serializes_with_method_tag() {
    let tree = RecipeTree::Direct {
        shard: "C9".to_string(),
        quantity: 5,
    };
    let value = serde_json::to_value(&tree).expect("Should serialize");

    assert_eq!(value["method"], "direct");
    assert_eq!(value["shard"], "C9");
    assert_eq!(value["quantity"], 5);
}

#[test]
fn test_recipe_tree_accessors() {
    let leaf = RecipeTree::Direct {
        shard: "A".to_string(),
        quantity: 3,
    };
    assert_eq!(leaf.shard(), "A");
    assert_eq!(leaf.quantity(), 3);
    assert!(leaf.is_direct());

    let node = RecipeTree::Recipe {
        shard: "Y".to_string(),
        quantity: 2,
        recipe: Recipe {
            inputs: ["A".to_string(), "B".to_string()],
            output_quantity: 1,
        },
        inputs: Box::new([
            RecipeTree::Direct { shard: "A".to_string(), quantity: 2 },
            RecipeTree::Direct { shard: "B".to_string(), quantity: 2 },
        ]),
    };
    assert_eq!(node.shard(), "Y");
    assert!(!node.is_direct());
}

#[test]
fn test_kuudra_tier_wire_format() {
    assert_eq!(
        serde_json::from_str::<KuudraTier>(r#""none""#).unwrap(),
        KuudraTier::None
    );
    assert_eq!(
        serde_json::from_str::<KuudraTier>(r#""t5""#).unwrap(),
        KuudraTier::T5
    );
    assert!(serde_json::from_str::<KuudraTier>(r#""t6""#).is_err());
}
