//! Typed document schema and the version-compatibility check.
//!
//! These structs describe the save-side shape of a circuit file. On disk,
//! property values may be any JSON primitive; the serializer always writes
//! canonical strings, so `DocumentComponent.properties` maps to `String`
//! here. The load path does not go through these types — it reads the raw
//! JSON tree so it can report missing fields individually (see
//! [`super::parse`]).

use indexmap::IndexMap;
use serde::Serialize;

use super::FormatError;

/// The top-level serialized structure: format version plus the circuits
/// mapping, keyed by circuit name.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub version: u32,
    pub circuits: IndexMap<String, DocumentCircuit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentCircuit {
    pub components: Vec<DocumentComponent>,
    pub wires: Vec<DocumentWire>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentComponent {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub properties: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentWire {
    pub x: i32,
    pub y: i32,
    pub length: i32,
    #[serde(rename = "isHorizontal")]
    pub is_horizontal: bool,
}

/// Exact-equality version gate. A mismatch is fatal for the whole load; this
/// layer never migrates or coerces old documents.
pub fn check_version(found: u32, expected: u32) -> Result<(), FormatError> {
    if found != expected {
        return Err(FormatError::IncompatibleVersion { found, expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_version_match() {
        assert!(check_version(3, 3).is_ok());
    }

    #[test]
    fn test_check_version_mismatch_carries_both() {
        match check_version(2, 3) {
            Err(FormatError::IncompatibleVersion { found, expected }) => {
                assert_eq!(found, 2);
                assert_eq!(expected, 3);
            }
            other => panic!("expected IncompatibleVersion, got {:?}", other),
        }
    }
}
