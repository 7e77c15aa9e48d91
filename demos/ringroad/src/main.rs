//! ringroad — console demo of the ring-road traffic simulation.
//!
//! Usage:
//!
//! ```text
//! ringroad <vehicles> <lights> <iterations> <road_length>
//!          [delay_secs=0] [light_cycle=9] [concurrent=1] [seed]
//!          [--output DIR] [--threads N]
//! ```
//!
//! Example: `ringroad 20 4 5 100 0 9 1 42`
//!
//! Prints every vehicle position and light phase after each tick.  With
//! `--output`, the same data is also written as CSV.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use rr_core::{SimConfig, Tick, TickMode};
use rr_output::{CsvWriter, OutputObserver};
use rr_sim::{SimBuilder, SimObserver, StateView};

#[derive(Parser, Debug)]
#[command(name = "ringroad")]
#[command(about = "Vehicles and traffic lights on a closed one-dimensional road")]
struct Args {
    /// Number of vehicles
    vehicles: usize,

    /// Number of traffic lights
    lights: usize,

    /// Number of ticks to simulate
    iterations: u64,

    /// Road length in cells (must be at least 6)
    road_length: u32,

    /// Pause between ticks, in seconds
    #[arg(default_value = "0")]
    delay: u64,

    /// Full light cycle in ticks (50 % green, 20 % yellow, rest red)
    #[arg(default_value = "9")]
    cycle: u32,

    /// 1 = lights and vehicles update concurrently, 0 = sequentially
    #[arg(default_value = "1")]
    concurrent: u8,

    /// RNG seed; defaults to the current time
    seed: Option<u64>,

    /// Also write per-tick CSV output to this directory
    #[arg(long)]
    output: Option<PathBuf>,

    /// Use a fixed worker count instead of sizing the pool every tick
    #[arg(long)]
    threads: Option<usize>,
}

// ── Console renderer ──────────────────────────────────────────────────────────

/// Prints the post-tick state, forwards to the optional CSV observer, and
/// paces the loop.
struct ConsoleObserver {
    delay: Duration,
    csv:   Option<OutputObserver<CsvWriter>>,
}

impl SimObserver for ConsoleObserver {
    fn on_tick_end(&mut self, tick: Tick, state: &StateView<'_>) {
        println!("\nIteration {}", tick.0 + 1);
        for v in state.vehicles() {
            println!("Vehicle {:2} - Position: {}", v.id.0, v.position);
        }
        for l in state.lights() {
            println!("Light {} - Phase: {}", l.id.0, l.phase);
        }

        if let Some(csv) = self.csv.as_mut() {
            csv.on_tick_end(tick, state);
        }
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, state: &StateView<'_>) {
        if let Some(csv) = self.csv.as_mut() {
            csv.on_snapshot(tick, state);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(csv) = self.csv.as_mut() {
            csv.on_sim_end(final_tick);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn default_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = SimConfig {
        road_length:           args.road_length,
        vehicle_count:         args.vehicles,
        light_count:           args.lights,
        total_ticks:           args.iterations,
        light_cycle_ticks:     args.cycle,
        seed:                  args.seed.unwrap_or_else(default_seed),
        tick_mode:             TickMode::from_concurrent_flag(args.concurrent != 0),
        dynamic_threads:       args.threads.is_none(),
        num_threads:           args.threads,
        tick_delay_ms:         args.delay * 1_000,
        output_interval_ticks: 1,
    };

    // Validation happens in build(), before any entity is allocated.
    let mut sim = SimBuilder::new(config.clone())
        .build()
        .context("invalid simulation configuration")?;

    println!("Ring-road traffic simulation");
    println!(
        "Vehicles: {} | Lights: {} | Iterations: {} | Road: {} | Dynamic workers: {}",
        config.vehicle_count,
        config.light_count,
        config.total_ticks,
        config.road_length,
        if config.dynamic_threads { "on" } else { "off" },
    );
    println!(
        "Mode: {} | Delay: {} s | Light cycle: {} ticks | Seed: {}",
        config.tick_mode, args.delay, config.light_cycle_ticks, config.seed,
    );

    let csv = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Some(OutputObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = ConsoleObserver {
        delay: Duration::from_millis(config.tick_delay_ms),
        csv,
    };

    sim.run(&mut obs)?;

    if let Some(csv) = obs.csv.as_mut() {
        match csv.take_error() {
            Some(e) => warn!("output error: {e}"),
            None => info!("CSV output written"),
        }
    }
    Ok(())
}
