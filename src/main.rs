//! # Goban Layout CLI
//!
//! Usage:
//!   goban-layout request.json -o layout.json
//!   echo '{ ... }' | goban-layout
//!   goban-layout --example > request.json

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use goban_layout::error::Result;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_request_json());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("✗ {e}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let output_path = args.windows(2).find(|w| w[0] == "-o").map(|w| w[1].clone());

    let json = goban_layout::layout_json(&input)?;
    match output_path {
        Some(path) => {
            fs::write(&path, &json)?;
            eprintln!("✓ Written {} bytes to {}", json.len(), path);
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn example_request_json() -> &'static str {
    r#"{
  "canvas": { "width": 760, "height": 760 },
  "board": { "columns": 19, "rows": 19 },
  "labels": "topAndLeft",
  "config": {
    "stageMarginFraction": 0.02,
    "stoneGapFraction": 0.01
  },
  "probes": [
    { "x": 380, "y": 380 },
    { "x": 5, "y": 5 }
  ]
}
"#
}
