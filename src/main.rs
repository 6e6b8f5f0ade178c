//! Shardforge - Command Line Interface
//!
//! This is the main entry point for the shard fusion calculator.
//! Run with `--help` to see all available options.

use clap::Parser;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use shardforge::{
    data::DataService,
    display::display_results,
    models::{CalculationParams, KuudraTier},
    optimizer::Calculator,
};

fn pet_level() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(0..=10)
}

/// Command-line arguments for Shardforge.
#[derive(Parser, Debug)]
#[command(name = "shardforge")]
#[command(author, version, about = "Calculate the cheapest fusion path for a target shard", long_about = None)]
struct Args {
    /// Target shard, by display name or catalog id
    #[arg(short, long)]
    shard: String,

    /// Number of shards to produce
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    quantity: u64,

    /// Directory containing fusion-data.json and rates.json
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// JSON file with custom rate overrides ({"<shardId>": ratePerHour})
    #[arg(long)]
    custom_rates: Option<PathBuf>,

    // ========== Fortune ==========
    /// Hunter fortune stat
    #[arg(long, default_value = "0.0")]
    hunter_fortune: f64,

    /// Frog pet active (flat 10% rate bonus)
    #[arg(long, default_value = "false")]
    frog_pet: bool,

    // ========== Pet levels (0-10) ==========
    /// Newt pet level (common shard fortune)
    #[arg(long, default_value = "0", value_parser = pet_level())]
    newt_level: u32,

    /// Salamander pet level (uncommon shard fortune)
    #[arg(long, default_value = "0", value_parser = pet_level())]
    salamander_level: u32,

    /// Lizard King pet level (rare shard fortune)
    #[arg(long, default_value = "0", value_parser = pet_level())]
    lizard_king_level: u32,

    /// Leviathan pet level (epic shard fortune)
    #[arg(long, default_value = "0", value_parser = pet_level())]
    leviathan_level: u32,

    /// Python pet level (black-hole shard rate bonus)
    #[arg(long, default_value = "0", value_parser = pet_level())]
    python_level: u32,

    /// King Cobra pet level (black-hole shard fortune bonus)
    #[arg(long, default_value = "0", value_parser = pet_level())]
    king_cobra_level: u32,

    /// Sea Serpent pet level (scales python and king cobra)
    #[arg(long, default_value = "0", value_parser = pet_level())]
    sea_serpent_level: u32,

    /// Tiamat pet level (scales sea serpent)
    #[arg(long, default_value = "0", value_parser = pet_level())]
    tiamat_level: u32,

    // ========== Kuudra ==========
    /// Kuudra tier for the boss-reward shard's derived rate
    #[arg(long, value_enum, default_value_t = KuudraTier::None)]
    kuudra_tier: KuudraTier,

    /// Money earned per hour, used to price Kuudra entry costs as time
    #[arg(long, default_value = "0.0")]
    money_per_hour: f64,

    // ========== Exclusions ==========
    /// Force the chameleon shard's rate to zero
    #[arg(long, default_value = "false")]
    exclude_chameleon: bool,

    /// Wooden bait disabled (heavy penalty for bait-dependent shards)
    #[arg(long, default_value = "false")]
    no_wooden_bait: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if !args.data_dir.exists() {
        eprintln!(
            "Error: data directory '{}' not found. Please run from the project root.",
            args.data_dir.display()
        );
        std::process::exit(1);
    }

    let custom_rates: HashMap<String, f64> = match &args.custom_rates {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => HashMap::new(),
    };

    let params = CalculationParams {
        custom_rates,
        hunter_fortune: args.hunter_fortune,
        exclude_chameleon: args.exclude_chameleon,
        frog_pet: args.frog_pet,
        newt_level: args.newt_level,
        salamander_level: args.salamander_level,
        lizard_king_level: args.lizard_king_level,
        leviathan_level: args.leviathan_level,
        python_level: args.python_level,
        king_cobra_level: args.king_cobra_level,
        sea_serpent_level: args.sea_serpent_level,
        tiamat_level: args.tiamat_level,
        kuudra_tier: args.kuudra_tier,
        money_per_hour: args.money_per_hour,
        no_wooden_bait: args.no_wooden_bait,
    };
    params.validate()?;

    let calculator = Calculator::new(DataService::new(&args.data_dir));

    // Accept either a catalog id or a display name.
    let target = if calculator.data().shard_definition(&args.shard)?.is_some() {
        args.shard.clone()
    } else {
        match calculator.data().shard_id_by_name(&args.shard)? {
            Some(id) => id.to_string(),
            None => {
                println!();
                println!("[WARNING] No shard named '{}' in the catalog.", args.shard);
                let suggestions = calculator.data().search_shards(&args.shard)?;
                if !suggestions.is_empty() {
                    println!("Did you mean:");
                    for (id, def) in suggestions.iter().take(5) {
                        println!("  {} ({}, {})", def.name, id, def.rarity);
                    }
                }
                return Ok(());
            }
        }
    };

    println!("Shardforge - Fusion Cost Calculator");
    println!("================================================================");
    println!();
    println!("Configuration:");
    println!("  Target:          {} x {}", args.quantity, args.shard);
    println!("  Hunter Fortune:  {}", args.hunter_fortune);
    println!(
        "  Kuudra:          {:?} at {:.0}/hour",
        args.kuudra_tier, args.money_per_hour
    );
    println!(
        "  Pets:            newt {} / salamander {} / lizard king {} / leviathan {}",
        args.newt_level, args.salamander_level, args.lizard_king_level, args.leviathan_level
    );
    println!(
        "                   python {} / king cobra {} / sea serpent {} / tiamat {}",
        args.python_level, args.king_cobra_level, args.sea_serpent_level, args.tiamat_level
    );
    if args.frog_pet {
        println!("  Frog Pet:        active");
    }
    if args.exclude_chameleon {
        println!("  Chameleon:       excluded");
    }
    if args.no_wooden_bait {
        println!("  Wooden Bait:     disabled");
    }

    let catalog = calculator.parse_data(&params)?;
    let result = calculator.calculate(&target, args.quantity, &params)?;
    display_results(&result, &catalog.shards);

    Ok(())
}
