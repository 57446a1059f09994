//! Drop-economy balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # 100 runs farming darkKnight
//!   cargo run --bin simulate -- -e dragon -l 20     # Farm the dragon at level 20
//!   cargo run --bin simulate -- --seed 42 --json    # Reproducible run, JSON saved

use gearforge::logging::init_tracing;
use gearforge::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, write_json) = parse_args(&args);

    init_tracing("gearforge=warn");

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              GEARFORGE BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.runs);
    println!("  Kills / Run:    {}", config.kills_per_run);
    println!("  Enemy:          {}", config.enemy_id);
    println!("  Player Level:   {}", config.player_level);
    println!("  Enchant:        {}", config.enchant_id);
    println!("  Upgrade:        {}", config.upgrade_id);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => {
                eprintln!("Failed to write {}: {}", filename, err);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-k" | "--kills" => {
                if i + 1 < args.len() {
                    config.kills_per_run = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-e" | "--enemy" => {
                if i + 1 < args.len() {
                    config.enemy_id = args[i + 1].clone();
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.player_level = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--enchant" => {
                if i + 1 < args.len() {
                    config.enchant_id = args[i + 1].clone();
                    i += 1;
                }
            }
            "--upgrade" => {
                if i + 1 < args.len() {
                    config.upgrade_id = args[i + 1].clone();
                    i += 1;
                }
            }
            "--json" => {
                write_json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, write_json)
}

fn print_help() {
    println!("Gearforge Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 100)");
    println!("    -k, --kills <K>     Kills per run (default: 200)");
    println!("    -e, --enemy <ID>    Enemy drop table to farm (default: darkKnight)");
    println!("    -l, --level <L>     Player level for drop gates (default: 10)");
    println!("        --seed <S>      Random seed for reproducibility");
    println!("        --enchant <ID>  Enchant recipe to apply (default: flaming)");
    println!("        --upgrade <ID>  Upgrade recipe to apply (default: soulreaper)");
    println!("        --json          Save the report as JSON");
    println!("    -h, --help          Show this help");
}
