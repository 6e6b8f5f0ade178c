//! Cost optimization and recipe resolution for Shardforge.
//!
//! This module contains the core engine: the fixed-point minimum-cost
//! solver over the recipe hypergraph, expansion of the chosen production
//! method into a quantity-annotated tree, and aggregation of raw-material
//! totals. [`Calculator`] ties the pieces together behind the data layer.

use std::collections::HashMap;

use crate::data::{DataError, DataService};
use crate::models::{CalculationParams, CalculationResult, Catalog, Recipe, RecipeTree, Shards};
use crate::rates::resolve_catalog;
use crate::tuning::Tuning;

/// Per-shard minimum cost and the production method that achieves it.
///
/// Costs are hours per unit; `f64::INFINITY` marks a shard with no direct
/// rate and no viable recipe chain. A `None` choice means "obtain directly".
#[derive(Debug, Clone)]
pub struct CostTable {
    pub min_costs: HashMap<String, f64>,
    pub choices: HashMap<String, Option<Recipe>>,
}

/// Computes the minimum time-cost per unit for every shard, and which
/// recipe (or direct gathering) achieves it.
///
/// Starts from the direct cost `1/rate` (infinity when the rate is 0) and
/// relaxes every candidate recipe until a full pass over all shards makes
/// no update. Every pass re-scans all candidates; costs only ever decrease,
/// so the loop reaches a fixed point regardless of iteration order, and the
/// strictly positive fusion penalty rules out infinite improvement even for
/// cyclic recipe data.
pub fn compute_min_costs(catalog: &Catalog, tuning: &Tuning) -> CostTable {
    let mut min_costs: HashMap<String, f64> = HashMap::with_capacity(catalog.shards.len());
    let mut choices: HashMap<String, Option<Recipe>> =
        HashMap::with_capacity(catalog.shards.len());

    for (id, shard) in &catalog.shards {
        let direct_cost = if shard.rate > 0.0 {
            1.0 / shard.rate
        } else {
            f64::INFINITY
        };
        min_costs.insert(id.clone(), direct_cost);
        choices.insert(id.clone(), None);
    }

    let mut updated = true;
    while updated {
        updated = false;
        for (output, candidates) in &catalog.recipes {
            for recipe in candidates {
                let [input1, input2] = &recipe.inputs;
                let (Some(shard1), Some(shard2)) =
                    (catalog.shards.get(input1), catalog.shards.get(input2))
                else {
                    continue;
                };
                let cost1 = min_costs[input1] * f64::from(shard1.fuse_amount);
                let cost2 = min_costs[input2] * f64::from(shard2.fuse_amount);
                let per_unit =
                    (cost1 + cost2 + tuning.craft_penalty_hours) / f64::from(recipe.output_quantity);

                if per_unit < min_costs[output] {
                    min_costs.insert(output.clone(), per_unit);
                    choices.insert(output.clone(), Some(recipe.clone()));
                    updated = true;
                }
            }
        }
    }

    CostTable { min_costs, choices }
}

/// Expands the chosen production method for `shard` into a tree, without
/// quantities.
///
/// The choice table comes from monotone relaxation: a recipe is only ever
/// recorded when it is strictly cheaper than what its inputs already cost,
/// so following choices can never revisit a node and the recursion
/// terminates.
pub fn build_recipe_tree(shard: &str, choices: &HashMap<String, Option<Recipe>>) -> RecipeTree {
    match choices.get(shard).and_then(|choice| choice.as_ref()) {
        None => RecipeTree::Direct {
            shard: shard.to_string(),
            quantity: 0,
        },
        Some(recipe) => {
            let inputs = Box::new([
                build_recipe_tree(&recipe.inputs[0], choices),
                build_recipe_tree(&recipe.inputs[1], choices),
            ]);
            RecipeTree::Recipe {
                shard: shard.to_string(),
                quantity: 0,
                recipe: recipe.clone(),
                inputs,
            }
        }
    }
}

/// Propagates required quantities top-down through the tree and returns the
/// number of fusion actions performed in the subtree.
///
/// A recipe node needs `ceil(required / output_quantity)` fusion actions;
/// each input child then needs `crafts * fuse_amount(input)` units. Rounding
/// up at every level is intentional: partial fusion outputs are not
/// obtainable, so actual production can exceed the nominal requirement.
pub fn assign_quantities(tree: &mut RecipeTree, required_quantity: u64, shards: &Shards) -> u64 {
    match tree {
        RecipeTree::Direct { quantity, .. } => {
            *quantity = required_quantity;
            0
        }
        RecipeTree::Recipe {
            quantity,
            recipe,
            inputs,
            ..
        } => {
            *quantity = required_quantity;
            let crafts = required_quantity.div_ceil(u64::from(recipe.output_quantity));
            let mut fusions = crafts;
            for (child, input_id) in inputs.iter_mut().zip(recipe.inputs.iter()) {
                let fuse_amount = shards
                    .get(input_id)
                    .map(|shard| u64::from(shard.fuse_amount))
                    .unwrap_or(1);
                fusions += assign_quantities(child, crafts * fuse_amount, shards);
            }
            fusions
        }
    }
}

/// Sums the quantities of every directly-gathered leaf, keyed by shard id.
///
/// The same shard appearing at multiple leaves is summed. Recipe nodes
/// contribute nothing themselves.
pub fn collect_total_quantities(tree: &RecipeTree) -> HashMap<String, u64> {
    let mut totals = HashMap::new();
    collect_into(tree, &mut totals);
    totals
}

fn collect_into(node: &RecipeTree, totals: &mut HashMap<String, u64>) {
    match node {
        RecipeTree::Direct { shard, quantity } => {
            *totals.entry(shard.clone()).or_insert(0) += quantity;
        }
        RecipeTree::Recipe { inputs, .. } => {
            for child in inputs.iter() {
                collect_into(child, totals);
            }
        }
    }
}

/// Runs the full pipeline against an already-resolved catalog.
///
/// A target absent from the catalog yields [`CalculationResult::empty`]
/// rather than an error. A target with no finite production path yields an
/// infinite `time_per_shard`/`total_time`, which callers are expected to
/// render, not treat as a crash.
pub fn calculate_optimal_path(
    catalog: &Catalog,
    target: &str,
    required_quantity: u64,
    tuning: &Tuning,
) -> CalculationResult {
    if !catalog.shards.contains_key(target) {
        return CalculationResult::empty(target);
    }

    let table = compute_min_costs(catalog, tuning);
    let mut tree = build_recipe_tree(target, &table.choices);
    let total_fusions = assign_quantities(&mut tree, required_quantity, &catalog.shards);
    let total_quantities = collect_total_quantities(&tree);

    let (crafts_needed, total_shards_produced) =
        match table.choices.get(target).and_then(|choice| choice.as_ref()) {
            Some(recipe) => {
                let output_quantity = u64::from(recipe.output_quantity);
                let crafts = required_quantity.div_ceil(output_quantity);
                (crafts, crafts * output_quantity)
            }
            None => (1, required_quantity),
        };

    let time_per_shard = table.min_costs.get(target).copied().unwrap_or(0.0);

    CalculationResult {
        time_per_shard,
        total_time: time_per_shard * total_shards_produced as f64,
        total_shards_produced,
        crafts_needed,
        total_quantities,
        total_fusions,
        craft_time: total_fusions as f64 * tuning.craft_penalty_hours,
        tree,
    }
}

/// The calculation engine: data access plus tuning, exposing the two
/// operations callers use.
///
/// Each call builds its own cost tables and tree; nothing is shared across
/// computations except the immutable catalog cache inside [`DataService`].
pub struct Calculator {
    data: DataService,
    tuning: Tuning,
}

impl Calculator {
    /// Creates a calculator with the default game tuning.
    pub fn new(data: DataService) -> Self {
        Calculator {
            data,
            tuning: Tuning::default(),
        }
    }

    /// Creates a calculator with explicit tuning values.
    pub fn with_tuning(data: DataService, tuning: Tuning) -> Self {
        Calculator { data, tuning }
    }

    /// The underlying data service, for catalog lookups and search.
    pub fn data(&self) -> &DataService {
        &self.data
    }

    /// Resolves the full catalog (shards with effective rates, flattened
    /// recipes) under the given parameters.
    pub fn parse_data(&self, params: &CalculationParams) -> Result<Catalog, DataError> {
        let fusion = self.data.fusion_data()?;
        let defaults = self.data.default_rates()?;
        Ok(resolve_catalog(fusion, defaults, params, &self.tuning))
    }

    /// Computes the optimal production path for `required_quantity` units
    /// of `target`.
    ///
    /// The only error is a data-load failure; unknown targets and
    /// unreachable shards produce well-defined results (see
    /// [`calculate_optimal_path`]).
    pub fn calculate(
        &self,
        target: &str,
        required_quantity: u64,
        params: &CalculationParams,
    ) -> Result<CalculationResult, DataError> {
        let catalog = self.parse_data(params)?;
        Ok(calculate_optimal_path(
            &catalog,
            target,
            required_quantity,
            &self.tuning,
        ))
    }
}
