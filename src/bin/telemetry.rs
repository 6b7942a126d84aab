use std::{env, path::PathBuf, process};

use dihedral::resources::{latest_telemetry_file, TelemetryLog};
use dihedral::utils::Result;

/// Usage: `dihedral_telemetry [file-or-directory]`
///
/// Prints a summary of a telemetry file, or of the newest one in a directory
/// (default `telemetry`).
fn main() {
    let target = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("telemetry"));

    if let Err(e) = run(target) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(target: PathBuf) -> Result<()> {
    let path = if target.is_dir() {
        match latest_telemetry_file(&target)? {
            Some(path) => path,
            None => {
                println!("No telemetry files in {}", target.display());
                return Ok(());
            }
        }
    } else {
        target
    };

    let log = TelemetryLog::load(&path)?;
    println!("{}", path.display());
    match log.summary() {
        Some(summary) => println!("{}", summary),
        None => println!("(empty)"),
    }
    Ok(())
}
