//! Command-line interface for roomscan
//!
//! Reads a RoomObservation from a JSON file, scores it and prints the
//! report as JSON.

use roomscan::{analyze_room, ColorCatalog, RoomObservation, ScoringConfig};
use std::{env, path::PathBuf, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut preset = "quick".to_string();
    let mut catalog_path: Option<PathBuf> = None;
    let mut observation_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--preset" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --preset requires a value (quick|full)");
                    process::exit(1);
                }
                preset = args[i + 1].clone();
                i += 1;
            }
            "--catalog" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --catalog requires a file path");
                    process::exit(1);
                }
                catalog_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if observation_arg.is_none() {
                    observation_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple observation files provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(observation_path) = observation_arg else {
        print_help(&args[0]);
        process::exit(1);
    };

    let config = match preset.as_str() {
        "quick" => ScoringConfig::quick_scan(),
        "full" => ScoringConfig::full_report(),
        other => {
            eprintln!("Unknown preset \"{}\" (expected quick or full)", other);
            process::exit(1);
        }
    };

    let catalog = match catalog_path {
        Some(path) => match ColorCatalog::from_json_file(&path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error loading catalog: {}", e);
                process::exit(1);
            }
        },
        None => ColorCatalog::builtin(),
    };

    let observation: RoomObservation = match std::fs::read_to_string(&observation_path)
        .map_err(|e| e.to_string())
        .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()))
    {
        Ok(observation) => observation,
        Err(e) => {
            eprintln!("Error reading observation {}: {}", observation_path, e);
            process::exit(1);
        }
    };

    match analyze_room(&catalog, &config, &observation) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    eprintln!("Usage: {} [--preset quick|full] [--catalog catalog.json] observation.json", program);
    eprintln!();
    eprintln!("The observation file holds the annotation data already extracted");
    eprintln!("by the vision layer, e.g.:");
    eprintln!(
        r#"  {{
    "objects": [{{"name": "Plant", "confidence": 0.92}}],
    "labels": [{{"description": "Lighting", "confidence": 0.45}}],
    "dominant_color": {{"red": 156, "green": 175, "blue": 136}},
    "room_type": "bedroom"
  }}"#
    );
}
