//! Console runner for the robot mission engine
//!
//! A thin shell over the simulation core: loads a JSON `WorldConfig`,
//! runs a number of ticks, and prints per-tick counters plus a final
//! waste census. It only reads engine state; all behavior lives in the
//! backend crate.

use robot_mission_core_rs::{Tier, World, WorldConfig};
use std::env;
use std::fs;
use std::process::ExitCode;

const DEFAULT_TICKS: usize = 100;

fn usage() -> ! {
    eprintln!("usage: robot-mission <config.json> [--ticks N] [--quiet]");
    std::process::exit(2);
}

struct Args {
    config_path: String,
    ticks: usize,
    quiet: bool,
}

fn parse_args() -> Args {
    let mut config_path = None;
    let mut ticks = DEFAULT_TICKS;
    let mut quiet = false;

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--ticks" {
            let value = iter.next().unwrap_or_else(|| usage());
            ticks = value.parse().unwrap_or_else(|_| usage());
        } else if arg == "--quiet" {
            quiet = true;
        } else if config_path.is_none() {
            config_path = Some(arg);
        } else {
            usage();
        }
    }

    Args {
        config_path: config_path.unwrap_or_else(|| usage()),
        ticks,
        quiet,
    }
}

fn main() -> ExitCode {
    let args = parse_args();

    let raw = match fs::read_to_string(&args.config_path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", args.config_path, e);
            return ExitCode::FAILURE;
        }
    };

    let config: WorldConfig = match serde_json::from_str(&raw) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: invalid config {}: {}", args.config_path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut world = match World::new(config) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for _ in 0..args.ticks {
        let result = world.tick();
        if !args.quiet {
            println!(
                "tick {:>5}: collected {:>3}  transformed {:>3}  disposed {:>3}  messages {:>3}  moves {:>3}",
                result.tick,
                result.num_collected,
                result.num_transformed,
                result.num_disposed,
                result.num_messages,
                result.num_moves
            );
        }
    }

    println!("--- after {} ticks ---", world.current_tick());
    for tier in Tier::ALL {
        println!("{:>6} waste: {}", tier.to_string(), world.waste_count(tier));
    }
    println!(" total waste: {}", world.total_waste_count());
    println!("      events: {}", world.event_log().len());

    ExitCode::SUCCESS
}
