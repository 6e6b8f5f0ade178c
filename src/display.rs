//! Display and formatting utilities for Shardforge.
//!
//! This module provides functions for formatting output and displaying
//! calculation results to the user in a readable format.

use crate::models::{CalculationResult, RecipeTree, Shards};

/// Formats a duration in decimal hours to a human-readable string.
///
/// Durations under a minute are shown in seconds; otherwise hours and
/// minutes, omitting whichever is zero. Infinite durations (no obtainable
/// path) render as "unobtainable".
///
/// # Example
///
/// ```
/// use shardforge::display::format_time;
///
/// assert_eq!(format_time(0.005), "18 seconds");
/// assert_eq!(format_time(0.5), "30 minutes");
/// assert_eq!(format_time(2.5), "2 hours 30 minutes");
/// assert_eq!(format_time(f64::INFINITY), "unobtainable");
/// ```
pub fn format_time(decimal_hours: f64) -> String {
    if !decimal_hours.is_finite() {
        return "unobtainable".to_string();
    }

    let total_seconds = (decimal_hours * 3600.0).round();
    if total_seconds < 60.0 {
        return format!("{:.0} seconds", total_seconds);
    }

    let hours = decimal_hours.floor();
    let minutes = ((decimal_hours - hours) * 60.0).round();

    if hours == 0.0 {
        return format!("{:.0} minutes", minutes);
    }
    if minutes == 0.0 {
        return format!("{:.0} hours", hours);
    }
    format!("{:.0} hours {:.0} minutes", hours, minutes)
}

/// Formats a number with precision scaled to its magnitude.
///
/// # Example
///
/// ```
/// use shardforge::display::format_number;
///
/// assert_eq!(format_number(0.0), "0");
/// assert_eq!(format_number(0.005), "0.0050");
/// assert_eq!(format_number(0.5), "0.50");
/// assert_eq!(format_number(2.0), "2");
/// assert_eq!(format_number(2.5), "2.50");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.01 {
        return format!("{:.4}", value);
    }
    if value < 1.0 {
        return format!("{:.2}", value);
    }
    let formatted = format!("{:.2}", value);
    formatted
        .strip_suffix(".00")
        .map(str::to_string)
        .unwrap_or(formatted)
}

/// Renders the production tree as an indented string.
///
/// Direct leaves show the quantity to gather; recipe nodes show the fusion
/// count and output multiple.
pub fn render_tree(node: &RecipeTree, shards: &Shards, indent: usize) -> String {
    let mut output = String::new();
    let prefix = "  ".repeat(indent);
    let name = shards
        .get(node.shard())
        .map(|shard| shard.name.as_str())
        .unwrap_or_else(|| node.shard());

    match node {
        RecipeTree::Direct { quantity, .. } => {
            output.push_str(&format!("{}{} x {} (direct)\n", prefix, quantity, name));
        }
        RecipeTree::Recipe {
            quantity,
            recipe,
            inputs,
            ..
        } => {
            let crafts = quantity.div_ceil(u64::from(recipe.output_quantity));
            output.push_str(&format!(
                "{}{} x {} ({} fusions of {} each)\n",
                prefix, quantity, name, crafts, recipe.output_quantity
            ));
            for child in inputs.iter() {
                output.push_str(&render_tree(child, shards, indent + 1));
            }
        }
    }

    output
}

/// Displays the complete calculation results to stdout.
///
/// Prints the summary statistics, the raw shards to gather, and the
/// production tree.
pub fn display_results(result: &CalculationResult, shards: &Shards) {
    let target_name = shards
        .get(result.tree.shard())
        .map(|shard| shard.name.as_str())
        .unwrap_or_else(|| result.tree.shard());

    println!();
    println!("+================================================================+");
    println!("|                 SHARD FUSION CALCULATION RESULTS               |");
    println!("+================================================================+");
    println!();

    if result.total_shards_produced == 0 {
        println!("[NO RESULT] {} is not in the shard catalog.", target_name);
        println!();
        return;
    }

    println!("[SUMMARY]");
    println!("----------------------------------------------------------------");
    println!("  Target:           {}", target_name);
    println!(
        "  Time per Shard:   {} ({}h)",
        format_time(result.time_per_shard),
        format_number(result.time_per_shard)
    );
    println!("  Total Time:       {}", format_time(result.total_time));
    println!("  Shards Produced:  {}", result.total_shards_produced);
    println!("  Crafts at Root:   {}", result.crafts_needed);
    if result.total_fusions > 0 {
        println!("  Total Fusions:    {}", result.total_fusions);
        println!("  Fusion Time:      {}", format_time(result.craft_time));
    }

    println!();
    println!("[RAW SHARDS TO GATHER]");
    println!("----------------------------------------------------------------");

    let mut totals: Vec<(&String, &u64)> = result.total_quantities.iter().collect();
    totals.sort_by(|a, b| {
        let name_a = shards.get(a.0).map(|s| s.name.as_str()).unwrap_or(a.0);
        let name_b = shards.get(b.0).map(|s| s.name.as_str()).unwrap_or(b.0);
        name_a.cmp(name_b)
    });
    for (id, quantity) in totals {
        let name = shards.get(id).map(|s| s.name.as_str()).unwrap_or(id);
        println!("  {:<24} x {}", name, quantity);
    }

    println!();
    println!("[PRODUCTION TREE]");
    println!("----------------------------------------------------------------");
    print!("{}", render_tree(&result.tree, shards, 1));
    println!();
}
