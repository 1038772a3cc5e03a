use std::path::PathBuf;

use airfoil_core::{AirfoilError, Result};
use airfoil_profile::{AirfoilRequest, MeshOptions, Spacing};

pub const USAGE: &str = r#"Usage: amt [OPTIONS] <4 digit NACA> <x resolution> <out file path>

ARGS:
    <4 digit NACA>    NACA 4-digit section, e.g. 0012 or 2412
    <x resolution>    Stations along the chord, 3 to 1000
    <out file path>   Wavefront OBJ file to write

OPTIONS:
    --linear          Space stations evenly instead of towards the leading edge
    --no-z-forward    Keep the chord along +X instead of rotating forward to +Z
    --summary         Print a JSON summary of the mesh to stdout
    -h, --help        Show this help message
"#;

#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub request: AirfoilRequest,
    pub output: PathBuf,
    pub summary: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Run(RunArgs),
}

/// Parse everything after the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command> {
    let mut options = MeshOptions::default();
    let mut summary = false;
    let mut positional = Vec::with_capacity(3);

    for arg in args.iter().map(AsRef::as_ref) {
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "--linear" => options.spacing = Spacing::Linear,
            "--no-z-forward" => options.z_forward = false,
            "--summary" => summary = true,
            flag if flag.starts_with("--") => {
                return Err(AirfoilError::Usage(format!("Unknown option {flag}")));
            }
            value => positional.push(value),
        }
    }

    let [code, resolution, output] = positional[..] else {
        return Err(AirfoilError::Usage(if positional.len() < 3 {
            "Missing required arguments".to_string()
        } else {
            format!("Unexpected argument {}", positional[3])
        }));
    };

    let request = AirfoilRequest::parse(code, resolution)?.with_options(options);
    Ok(Command::Run(RunArgs {
        request,
        output: PathBuf::from(output),
        summary,
    }))
}
