//! Headless driver for the gridfire engine.
//!
//! Stands in for the Display/Input boundary: feeds commands, runs ticks,
//! and prints periodic reports from the per-tick snapshot.

use clap::Parser;
use gridfire_core::{Command, Simulation, SimulationConfig, WindMode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Forest-fire simulation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "gridfire-demo")]
#[command(about = "Headless forest-fire grid simulation", long_about = None)]
struct Args {
    /// Number of ticks to run
    #[arg(short, long, default_value_t = 2000)]
    ticks: u64,

    /// RNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// World width in world units
    #[arg(long, default_value_t = 1000.0)]
    width: f32,

    /// World height in world units
    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Cell edge length in world units
    #[arg(long, default_value_t = 4.0)]
    cell_size: f32,

    /// Probability a cell starts as vegetation
    #[arg(long, default_value_t = 0.7)]
    tree_density: f32,

    /// Base per-tick ignition chance
    #[arg(long, default_value_t = 0.02)]
    spread_chance: f32,

    /// Base per-tick burnout chance
    #[arg(long, default_value_t = 0.005)]
    burnout_chance: f32,

    /// Humidity noise seed
    #[arg(long, default_value_t = 0)]
    humidity_seed: u32,

    /// Tick at which rain starts (0 = never)
    #[arg(long, default_value_t = 0)]
    rain_at: u64,

    /// Use the manual wind accumulator instead of the oscillating wind
    #[arg(long)]
    manual_wind: bool,

    /// Number of ignition points scattered across the grid
    #[arg(short, long, default_value_t = 1)]
    ignitions: usize,

    /// Report interval in ticks
    #[arg(short, long, default_value_t = 100)]
    report_interval: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = SimulationConfig {
        world_width: args.width,
        world_height: args.height,
        cell_size: args.cell_size,
        tree_density: args.tree_density,
        spread_chance: args.spread_chance,
        burnout_chance: args.burnout_chance,
        humidity_seed: args.humidity_seed,
        wind_mode: if args.manual_wind {
            WindMode::Manual
        } else {
            WindMode::Deterministic
        },
        ..SimulationConfig::default()
    };

    let mut sim = match Simulation::new(&config, StdRng::seed_from_u64(args.seed)) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    println!("=== Gridfire Demo ===");
    println!(
        "grid {}x{} cells, {} ignition(s), seed {}\n",
        config.rows(),
        config.cols(),
        args.ignitions,
        args.seed
    );

    // Scatter ignition points on a diagonal band through the grid
    let rows = config.rows();
    let cols = config.cols();
    for i in 0..args.ignitions {
        let row = rows * (i + 1) / (args.ignitions + 1);
        let col = cols * (i + 1) / (args.ignitions + 1);
        sim.submit(Command::Ignite { row, col });
    }

    for tick in 1..=args.ticks {
        if args.rain_at != 0 && tick == args.rain_at {
            sim.submit(Command::ToggleRain);
            println!("[tick {tick}] rain started");
        }

        let snapshot = sim.step();

        if tick % args.report_interval == 0 || tick == args.ticks {
            println!(
                "[tick {tick}] burning {:5}  burnt {:6}  unburned {:6}  embers {:4}  wind ({:+.2}, {:+.2}){}",
                snapshot.burning_count(),
                snapshot.burnt_count(),
                snapshot.unburned_count(),
                snapshot.particles.len(),
                snapshot.wind.x,
                snapshot.wind.y,
                if snapshot.raining { "  raining" } else { "" }
            );
        }

        if snapshot.burning_count() == 0 && tick > 1 {
            println!("\nfire extinguished after {tick} ticks");
            break;
        }
    }

    let last = sim.snapshot();
    println!(
        "\nfinal: {} burnt of {} cells ({:.1}%)",
        last.burnt_count(),
        rows * cols,
        100.0 * last.burnt_count() as f32 / (rows * cols) as f32
    );
}
