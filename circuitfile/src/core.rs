//! File-level load/save helpers shared by CLI and host applications.
//!
//! All file I/O in the crate lives here; the format layer itself never
//! touches the filesystem.

use std::fs;
use std::path::Path;

use crate::descriptor::CircuitDescriptor;
use crate::format::{self, FormatError};

#[derive(Debug, thiserror::Error)]
pub enum CircuitFileError {
    #[error("{0}")]
    Format(#[from] FormatError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read and parse a circuit file, gating on `expected_version`.
pub fn load_circuits(
    path: &Path,
    expected_version: u32,
) -> Result<Vec<CircuitDescriptor>, CircuitFileError> {
    let text = fs::read_to_string(path)?;
    let circuits = format::parse(&text, expected_version)?;
    tracing::debug!("loaded {} circuit(s) from {}", circuits.len(), path.display());
    Ok(circuits)
}

/// Serialize circuits and write them to `path`, with a trailing newline.
pub fn save_circuits(
    path: &Path,
    circuits: &[CircuitDescriptor],
    version: u32,
) -> Result<(), CircuitFileError> {
    let mut text = format::serialize(circuits, version)?;
    text.push('\n');
    fs::write(path, text)?;
    tracing::debug!("saved {} circuit(s) to {}", circuits.len(), path.display());
    Ok(())
}
