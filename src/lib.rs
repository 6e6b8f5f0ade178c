//! # Shardforge
//!
//! A command-line tool and library for finding the cheapest way to produce
//! a target shard through fusion.
//!
//! Every shard is obtainable either directly (at some rate in shards/hour)
//! or by fusing two input shards together. This crate computes, for a target
//! shard and quantity:
//!
//! - The minimum time-cost per shard across all production methods
//! - The concrete fusion tree that achieves it, with per-node quantities
//! - Totals for every raw shard that has to be gathered directly
//! - The number of fusion actions and the time they add
//!
//! Direct rates are shaped by user configuration: hunter fortune, pet
//! levels, Kuudra tier for the boss-reward shard, and per-shard overrides.
//!
//! ## Modules
//!
//! - [`models`] - Core data structures: shards, recipes, trees, parameters
//! - [`tuning`] - Game tuning values kept as configuration data
//! - [`data`] - JSON catalog loading with populate-once caching
//! - [`rates`] - Effective direct-rate resolution (fortune, pets, Kuudra)
//! - [`optimizer`] - Min-cost solver, tree expansion, quantity propagation
//! - [`display`] - Output formatting and display utilities
//! - [`wasm`] - WebAssembly bindings with JSON envelopes
//!
//! ## Example Usage
//!
//! ```no_run
//! use shardforge::{
//!     data::DataService,
//!     models::CalculationParams,
//!     optimizer::Calculator,
//!     display::display_results,
//! };
//!
//! let calculator = Calculator::new(DataService::new("data"));
//!
//! let mut params = CalculationParams::default();
//! params.hunter_fortune = 50.0;
//!
//! let catalog = calculator.parse_data(&params).unwrap();
//! let result = calculator.calculate("R25", 48, &params).unwrap();
//! display_results(&result, &catalog.shards);
//! ```

pub mod data;
pub mod display;
pub mod models;
pub mod optimizer;
pub mod rates;
pub mod tuning;
pub mod wasm;
