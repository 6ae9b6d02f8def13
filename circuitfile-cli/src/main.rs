//! CircuitFile CLI - inspect and check circuit design files from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use circuitfile::property::{SharedValidator, TextValidator};
use circuitfile::{format, load_circuits, save_circuits, CircuitDescriptor, CircuitFileError};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

/// Format version this tool reads and writes by default.
const FILE_VERSION: u32 = 1;

#[derive(Parser)]
#[command(name = "circuitfile")]
#[command(about = "Circuit design file inspection tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a circuit file parses and matches the expected version
    Check {
        /// Path to the circuit file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Expected format version
        #[arg(long, default_value_t = FILE_VERSION)]
        file_version: u32,
    },

    /// Print a per-circuit summary of a circuit file
    Info {
        /// Path to the circuit file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Expected format version
        #[arg(long, default_value_t = FILE_VERSION)]
        file_version: u32,
    },

    /// Rewrite a circuit file in canonical formatting
    Normalize {
        /// Path to the circuit file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the result instead of rewriting the file
        #[arg(long)]
        stdout: bool,

        /// Expected format version
        #[arg(long, default_value_t = FILE_VERSION)]
        file_version: u32,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for CI/CD
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check {
            file,
            format,
            file_version,
        } => handle_check(&file, format, file_version),
        Commands::Info {
            file,
            format,
            file_version,
        } => handle_info(&file, format, file_version),
        Commands::Normalize {
            file,
            stdout,
            file_version,
        } => handle_normalize(&file, stdout, file_version),
    };

    process::exit(exit_code);
}

fn handle_check(file: &Path, format: OutputFormat, file_version: u32) -> i32 {
    match load_circuits(file, file_version) {
        Ok(circuits) => {
            match format {
                OutputFormat::Human => {
                    println!("OK: {} ({} circuits)", file.display(), circuits.len());
                }
                OutputFormat::Json => {
                    let report = serde_json::json!({
                        "ok": true,
                        "file": file.display().to_string(),
                        "circuits": circuits.len(),
                    });
                    println!("{}", report);
                }
            }
            0
        }
        Err(e) => {
            report_error(file, &e, &format);
            1
        }
    }
}

fn handle_info(file: &Path, format: OutputFormat, file_version: u32) -> i32 {
    let circuits = match load_circuits(file, file_version) {
        Ok(circuits) => circuits,
        Err(e) => {
            report_error(file, &e, &format);
            return 1;
        }
    };

    match format {
        OutputFormat::Human => {
            println!("{}: {} circuits", file.display(), circuits.len());
            for circuit in &circuits {
                println!(
                    "  {}: {} components, {} wires",
                    circuit.name,
                    circuit.components.len(),
                    circuit.wires.len()
                );
            }
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = circuits
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "name": c.name,
                        "components": c.components.len(),
                        "wires": c.wires.len(),
                    })
                })
                .collect();
            let report = serde_json::json!({
                "file": file.display().to_string(),
                "circuits": entries,
            });
            println!("{}", report);
        }
    }
    0
}

fn handle_normalize(file: &Path, to_stdout: bool, file_version: u32) -> i32 {
    let mut circuits = match load_circuits(file, file_version) {
        Ok(circuits) => circuits,
        Err(e) => {
            eprintln!("error: {}: {}", file.display(), e);
            return 1;
        }
    };

    // Loaded properties carry no validators; attach the pass-through text
    // validator so every value has a canonical string form again.
    attach_passthrough_validators(&mut circuits);

    if to_stdout {
        match format::serialize(&circuits, file_version) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("error: {}: {}", file.display(), e);
                1
            }
        }
    } else {
        match save_circuits(file, &circuits, file_version) {
            Ok(()) => {
                println!("normalized {}", file.display());
                0
            }
            Err(e) => {
                eprintln!("error: {}: {}", file.display(), e);
                1
            }
        }
    }
}

fn attach_passthrough_validators(circuits: &mut [CircuitDescriptor]) {
    let validator: SharedValidator = Arc::new(TextValidator);
    for circuit in circuits {
        for component in &mut circuit.components {
            for property in component.properties.values_mut() {
                if property.validator.is_none() {
                    property.validator = Some(validator.clone());
                }
            }
        }
    }
}

fn report_error(file: &Path, error: &CircuitFileError, format: &OutputFormat) {
    match format {
        OutputFormat::Human => eprintln!("error: {}: {}", file.display(), error),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "ok": false,
                "file": file.display().to_string(),
                "error": error.to_string(),
            });
            println!("{}", report);
        }
    }
}
