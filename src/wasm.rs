//! WebAssembly bindings for Shardforge.
//!
//! This module provides JavaScript-accessible functions for the fusion
//! calculator. Input and output are JSON strings; results carry a
//! `success`/`error` envelope so callers never have to catch exceptions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::data::DataService;
use crate::display::format_time;
use crate::models::{CalculationParams, CalculationResult, RecipeTree, Shard};
use crate::optimizer::Calculator;

/// JavaScript-friendly calculation request.
///
/// All parameter fields are optional and default to the neutral
/// configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsCalculateInput {
    pub target_shard: String,
    pub quantity: u64,
    #[serde(flatten)]
    pub params: CalculationParams,
}

/// JavaScript-friendly calculation result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsCalculateResult {
    pub success: bool,
    pub error: Option<String>,
    pub time_per_shard: f64,
    pub time_per_shard_formatted: String,
    pub total_time: f64,
    pub total_time_formatted: String,
    pub total_shards_produced: u64,
    pub crafts_needed: u64,
    pub total_fusions: u64,
    pub craft_time: f64,
    pub total_quantities: HashMap<String, u64>,
    pub tree: Option<RecipeTree>,
}

impl JsCalculateResult {
    fn failure(message: String) -> Self {
        JsCalculateResult {
            success: false,
            error: Some(message),
            time_per_shard: 0.0,
            time_per_shard_formatted: String::new(),
            total_time: 0.0,
            total_time_formatted: String::new(),
            total_shards_produced: 0,
            crafts_needed: 0,
            total_fusions: 0,
            craft_time: 0.0,
            total_quantities: HashMap::new(),
            tree: None,
        }
    }
}

impl From<CalculationResult> for JsCalculateResult {
    fn from(result: CalculationResult) -> Self {
        JsCalculateResult {
            success: true,
            error: None,
            time_per_shard: result.time_per_shard,
            time_per_shard_formatted: format_time(result.time_per_shard),
            total_time: result.total_time,
            total_time_formatted: format_time(result.total_time),
            total_shards_produced: result.total_shards_produced,
            crafts_needed: result.crafts_needed,
            total_fusions: result.total_fusions,
            craft_time: result.craft_time,
            total_quantities: result.total_quantities,
            tree: Some(result.tree),
        }
    }
}

/// Builds a calculator over the data embedded in the wasm binary.
fn embedded_calculator() -> Result<Calculator, String> {
    let fusion = serde_json::from_str(include_str!("../data/fusion-data.json"))
        .map_err(|e| format!("Embedded fusion data invalid: {}", e))?;
    let rates = serde_json::from_str(include_str!("../data/rates.json"))
        .map_err(|e| format!("Embedded rates data invalid: {}", e))?;
    Ok(Calculator::new(DataService::from_documents(fusion, rates)))
}

/// Run a fusion cost calculation.
///
/// Takes a JSON string input and returns a JSON string result.
#[wasm_bindgen]
pub fn calculate(input_json: &str) -> String {
    let result = calculate_impl(input_json);
    serde_json::to_string(&result).unwrap_or_default()
}

fn calculate_impl(input_json: &str) -> JsCalculateResult {
    let input: JsCalculateInput = match serde_json::from_str(input_json) {
        Ok(input) => input,
        Err(e) => return JsCalculateResult::failure(format!("Invalid input: {}", e)),
    };

    if input.quantity == 0 {
        return JsCalculateResult::failure("Quantity must be at least 1".to_string());
    }
    if let Err(e) = input.params.validate() {
        return JsCalculateResult::failure(e.to_string());
    }

    let calculator = match embedded_calculator() {
        Ok(calculator) => calculator,
        Err(message) => return JsCalculateResult::failure(message),
    };

    match calculator.calculate(&input.target_shard, input.quantity, &input.params) {
        Ok(result) => result.into(),
        Err(e) => JsCalculateResult::failure(e.to_string()),
    }
}

/// Get the fully-resolved shard catalog for display.
///
/// Takes calculation parameters as JSON (an empty or invalid document falls
/// back to defaults) and returns a JSON array of shards with their
/// effective rates, sorted by name.
#[wasm_bindgen]
pub fn get_shards(params_json: &str) -> String {
    let params: CalculationParams = serde_json::from_str(params_json).unwrap_or_default();

    let calculator = match embedded_calculator() {
        Ok(calculator) => calculator,
        Err(_) => return "[]".to_string(),
    };

    let catalog = match calculator.parse_data(&params) {
        Ok(catalog) => catalog,
        Err(_) => return "[]".to_string(),
    };

    let mut shards: Vec<&Shard> = catalog.shards.values().collect();
    shards.sort_by(|a, b| a.name.cmp(&b.name));

    serde_json::to_string(&shards).unwrap_or_default()
}

/// Get the version of the calculator.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
