//! NACA 4-digit airfoil mesh generator
//!
//! Samples a NACA 4-digit section, lofts it into a unit-chord prism spanning
//! z = -1..1 and writes the result as a Wavefront OBJ file.
//!
//! # Usage
//!
//! ```bash
//! amt 0012 50 naca0012.obj
//! amt --summary --linear 2412 100 naca2412.obj
//! ```

mod args;

use std::process;

use airfoil_core::AirfoilError;
use airfoil_mesh::{build_mesh, save_obj, MeshSummary};
use tracing_subscriber::EnvFilter;

use crate::args::{parse_args, Command, RunArgs, USAGE};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: RunArgs) -> Result<(), AirfoilError> {
    let mesh = build_mesh(&args.request)?;

    // A file that cannot be written is reported but does not fail the run.
    if let Err(err) = save_obj(&mesh, &args.output) {
        eprintln!("Failed to open output file: {}: {err}", args.output.display());
    }

    if args.summary {
        let summary = MeshSummary::new(&args.request, &mesh);
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("Failed to encode summary: {err}"),
        }
    }
    Ok(())
}

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(AirfoilError::Usage(msg)) => {
            eprintln!("Error: {msg}\n");
            eprint!("{USAGE}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    match command {
        Command::Help => print!("{USAGE}"),
        Command::Run(run_args) => {
            if let Err(err) = run(run_args) {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    }
}
