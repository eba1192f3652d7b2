//! Game of Life CLI - Run simulations from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;
use std::time::Instant;

use game_of_life::{
    compute::{Grid, SimulationStats},
    schema::{PatternCatalog, PatternSource, SimulationConfig},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations (default: from config)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let config = SimulationConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let generations: u64 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.generations);

    let mut grid = Grid::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error creating grid: {}", e);
        std::process::exit(1);
    });

    println!("Game of Life Simulation");
    println!("=======================");
    println!("Grid: {}x{} ({} boundary)", config.width, config.length, config.boundary);
    match &config.pattern {
        Some(PatternSource::Named(name)) => println!("Pattern: {}", name),
        Some(PatternSource::Custom(pattern)) => println!("Pattern: {} (custom)", pattern.name),
        None => println!("Pattern: random (seed {})", config.seed),
    }
    println!("Generations: {}", generations);
    println!();

    let initial_stats = SimulationStats::from_grid(&grid);
    println!("Initial state:");
    print_stats(&initial_stats);
    println!();

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..generations {
        grid.advance_generation();

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let stats = SimulationStats::from_grid(&grid);
            let elapsed = start.elapsed().as_secs_f32();
            let gens_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Generation {}/{}: live={}, entropy={:.4}, {:.1} gen/s",
                i + 1,
                generations,
                stats.live_cells,
                stats.entropy,
                gens_per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = SimulationStats::from_grid(&grid);

    println!();
    println!("Final state:");
    print_stats(&final_stats);
    println!();
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
}

fn print_stats(stats: &SimulationStats) {
    println!("  Live cells: {}", stats.live_cells);
    println!("  Dead cells: {}", stats.dead_cells);
    println!("  Density: {:.4}", stats.density);
    println!("  Entropy: {:.6} bits", stats.entropy);
}

fn print_example_config() {
    let config = SimulationConfig {
        pattern: Some(PatternSource::from("glider_gun")),
        generations: 100,
        ..Default::default()
    };

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
    println!();
    println!(
        "Built-in patterns: {}",
        PatternCatalog::builtin().names().join(", ")
    );
    println!("Boundary modes: fixed, periodic, reflective, toroidal");
}
