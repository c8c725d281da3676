// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: reconstruct map geometry and print a JSON summary
//!
//! Usage:
//!   bsp-lite <map.json> [options]

use bsp_lite_processing::{load_map_file, process_map, ProcessingConfig};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let map_path = &args[1];
    let mut config = ProcessingConfig::from_env();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--threads" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    Some(n) if n > 0 => config.worker_threads = n,
                    _ => fail("Invalid --threads value"),
                }
            }
            "--sequential" => config.parallel = false,
            "--strict" => config.skip_failed_faces = false,
            "--spawn-prefix" => {
                i += 1;
                match args.get(i) {
                    Some(prefix) => config.spawn_prefix = prefix.clone(),
                    None => fail("Missing --spawn-prefix value"),
                }
            }
            other => fail(&format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let map = match load_map_file(map_path) {
        Ok(map) => map,
        Err(e) => fail(&format!("Failed to load {}: {}", map_path, e)),
    };

    let result = match process_map(&map, &config) {
        Ok(result) => result,
        Err(e) => fail(&format!("Processing failed: {}", e)),
    };

    match result.summary_json() {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("Failed to write summary: {}", e)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: bsp-lite <map.json> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --threads <N>          Worker threads for parallel reconstruction");
    eprintln!("  --sequential           Reconstruct faces on the calling thread");
    eprintln!("  --strict               Abort on the first failed face");
    eprintln!("  --spawn-prefix <NAME>  Classname prefix for spawn points (default: info_player_)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG, BSP_LITE_WORKER_THREADS, BSP_LITE_PARALLEL,");
    eprintln!("  BSP_LITE_SPAWN_PREFIX, BSP_LITE_SKIP_FAILED_FACES");
}
